//! Canonicalizes the leading import block of a Python module.
//!
//! The pipeline parses the source, collects every top-level import
//! statement, and rebuilds the block in canonical form:
//! - names within each declaration are sorted and deduplicated
//! - declarations are ordered by rank, relative level, deferred bucket and
//!   lowercase name
//! - qualified imports from the same source are merged into one
//! - declarations wrap into parenthesized lists past the column budget,
//!   with blank lines between precedence groups
//!
//! Only the rebuilt import block is returned; splicing it back into the
//! file is the caller's concern.

mod classify;
mod config;
mod merge;
mod render;
mod sorting;
mod types;

// Re-export public API
pub use config::{Config, RelativeOrder};
pub use ruff_python_parser::ParseError;

/// Run the full parse, classify, sort, merge, render pipeline over `source`
/// and return the canonical import block.
///
/// Parse failures surface unchanged from the parser. The output carries no
/// trailing newline; a module without imports yields an empty string.
///
/// ```
/// use importune::{Config, canonicalize_imports};
///
/// let block = canonicalize_imports("import sys\nimport os\n", &Config::default())?;
/// assert_eq!(block, "import os\nimport sys");
/// # Ok::<(), importune::ParseError>(())
/// ```
pub fn canonicalize_imports(source: &str, config: &Config) -> Result<String, ParseError> {
    let module = ruff_python_parser::parse_module(source)?.into_syntax();
    let decls = classify::classify_imports(&module);
    let sorted = sorting::sort_imports(decls, config);
    let merged = merge::merge_adjacent(sorted);
    Ok(render::render_block(&merged))
}
