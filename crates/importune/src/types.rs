//! Shared type definitions for the import canonicalizer
//!
//! The declaration model is deliberately parser-free: the classifier owns the
//! conversion from `ruff_python_ast` nodes, and every later stage works on
//! these types only.

const FUTURE_MODULE: &str = "__future__";

/// A single imported symbol with its optional binding alias.
///
/// Two names are equal only when both `name` and `alias` match exactly; case
/// differences make distinct names, not duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportedName {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
}

/// A classified import declaration from the module's top-level body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportDecl {
    /// `import x, y as z` - each name denotes a whole module.
    Import { names: Vec<ImportedName> },
    /// `from .pkg.mod import a, b as c` - `level` counts the leading dots,
    /// `module` is absent in the dots-only form (`from .. import x`).
    ImportFrom {
        level: u32,
        module: Option<String>,
        names: Vec<ImportedName>,
    },
}

impl ImportDecl {
    /// Whether this is `from __future__ import ...`, which outranks every
    /// other declaration. A plain `import __future__` does not qualify.
    pub(crate) fn is_future(&self) -> bool {
        matches!(
            self,
            Self::ImportFrom {
                module: Some(module),
                ..
            } if module == FUTURE_MODULE
        )
    }

    pub(crate) fn names(&self) -> &[ImportedName] {
        match self {
            Self::Import { names } | Self::ImportFrom { names, .. } => names,
        }
    }

    pub(crate) fn names_mut(&mut self) -> &mut Vec<ImportedName> {
        match self {
            Self::Import { names } | Self::ImportFrom { names, .. } => names,
        }
    }

    pub(crate) fn into_names(self) -> Vec<ImportedName> {
        match self {
            Self::Import { names } | Self::ImportFrom { names, .. } => names,
        }
    }
}

/// Precedence tier of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Rank {
    Future,
    Normal,
}

/// Composite ordering key, computed once per declaration by the sort engine
/// and reused by the renderer's blank-line grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SortKey {
    pub(crate) rank: Rank,
    /// Relative-import dot count; 0 for absolute and plain imports.
    pub(crate) level: u32,
    /// Deferred-prefix bucket: 0 when not deferred, `i + 1` for a match on
    /// the i-th configured prefix.
    pub(crate) bucket: usize,
    /// Lowercased module path, or the lowercased first member name when the
    /// declaration carries no module.
    pub(crate) name: String,
}

impl SortKey {
    /// The triple that decides blank-line separation between rendered
    /// declarations.
    pub(crate) fn group(&self) -> (Rank, u32, usize) {
        (self.rank, self.level, self.bucket)
    }
}

/// A declaration paired with its memoized sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedImport {
    pub(crate) key: SortKey,
    pub(crate) decl: ImportDecl,
}
