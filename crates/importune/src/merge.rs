//! Adjacent-declaration merging
//!
//! Runs after sorting, so qualified imports sharing `(level, module)` are
//! normally contiguous and one lookback slot unifies each run. The exception
//! is a plain import whose name ties the run's key: it sorts into the run
//! and splits it, and each half merges separately.

use log::debug;

use crate::sorting::normalize_names;
use crate::types::{ImportDecl, OrderedImport};

/// Collapse runs of qualified imports from the same source into single
/// declarations. Plain imports pass through untouched and flush whatever is
/// held.
pub(crate) fn merge_adjacent(sorted: Vec<OrderedImport>) -> Vec<OrderedImport> {
    let total = sorted.len();
    let mut merged: Vec<OrderedImport> = Vec::with_capacity(total);
    let mut held: Option<OrderedImport> = None;

    for import in sorted {
        if matches!(import.decl, ImportDecl::Import { .. }) {
            merged.extend(held.take());
            merged.push(import);
            continue;
        }
        match held.take() {
            Some(mut prev) if same_source(&prev.decl, &import.decl) => {
                prev.decl.names_mut().extend(import.decl.into_names());
                normalize_names(prev.decl.names_mut());
                held = Some(prev);
            }
            prev => {
                merged.extend(prev);
                held = Some(import);
            }
        }
    }
    merged.extend(held);

    debug!("merged {total} declarations into {}", merged.len());
    merged
}

/// Two qualified imports merge only when both the relative level and the
/// module path agree.
fn same_source(a: &ImportDecl, b: &ImportDecl) -> bool {
    match (a, b) {
        (
            ImportDecl::ImportFrom {
                level: level_a,
                module: module_a,
                ..
            },
            ImportDecl::ImportFrom {
                level: level_b,
                module: module_b,
                ..
            },
        ) => level_a == level_b && module_a == module_b,
        _ => false,
    }
}
