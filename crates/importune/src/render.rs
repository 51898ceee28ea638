//! Serialization of the ordered declarations back to text
//!
//! Each declaration renders on a single line unless its computed width
//! exceeds the column budget, in which case the names move into a
//! parenthesized list, one per line. Declarations are joined by newlines,
//! with a blank line wherever the grouping triple changes.

use crate::types::{ImportDecl, ImportedName, OrderedImport, Rank};

/// Single-line budget; computed widths past this wrap.
pub(crate) const LINE_WIDTH: usize = 81;

/// Render the whole block. Declarations are separated by single newlines,
/// with one blank line inserted at every `(rank, level, bucket)` boundary.
/// No trailing newline; an empty input renders as the empty string.
pub(crate) fn render_block(imports: &[OrderedImport]) -> String {
    let mut rendered: Vec<String> = Vec::with_capacity(imports.len());
    let mut previous_group: Option<(Rank, u32, usize)> = None;
    for import in imports {
        let group = import.key.group();
        if previous_group.is_some_and(|previous| previous != group) {
            rendered.push(String::new());
        }
        previous_group = Some(group);
        rendered.push(render_decl(&import.decl));
    }
    rendered.join("\n")
}

fn render_decl(decl: &ImportDecl) -> String {
    match decl {
        ImportDecl::Import { names } => {
            format!("import {}", render_names("import ".len(), names))
        }
        ImportDecl::ImportFrom {
            level,
            module,
            names,
        } => {
            let mut prefix = String::from("from ");
            for _ in 0..*level {
                prefix.push('.');
            }
            if let Some(module) = module {
                prefix.push_str(module);
            }
            prefix.push_str(" import ");
            let names = render_names(prefix.chars().count(), names);
            format!("{prefix}{names}")
        }
    }
}

/// Lay out the name list. The width estimate charges every name its
/// formatted length plus 2, covering the `, ` separator including a
/// trailing one, and is measured in characters, not bytes.
fn render_names(initial_length: usize, names: &[ImportedName]) -> String {
    let formatted: Vec<String> = names.iter().map(format_name).collect();
    let width: usize = initial_length
        + formatted
            .iter()
            .map(|name| name.chars().count() + 2)
            .sum::<usize>();
    if width > LINE_WIDTH {
        let lines = formatted
            .iter()
            .map(|name| format!("    {name}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("(\n{lines}\n)")
    } else {
        formatted.join(", ")
    }
}

fn format_name(name: &ImportedName) -> String {
    match &name.alias {
        Some(alias) => format!("{} as {}", name.name, alias),
        None => name.name.clone(),
    }
}
