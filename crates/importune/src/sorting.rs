//! Name normalization and the declaration sort engine
//!
//! Declarations order by the composite key `(rank, level, bucket, name)`.
//! The key is computed once per declaration and travels with it so the
//! renderer can reuse the grouping triple without recomputation.

use std::cmp::Ordering;

use cow_utils::CowUtils;
use log::debug;

use crate::config::{Config, RelativeOrder};
use crate::types::{ImportDecl, ImportedName, OrderedImport, Rank, SortKey};

/// Sort a declaration's names by `(lowercase(name), alias)` and drop exact
/// `(name, alias)` duplicates. An absent alias sorts before a present one
/// when the names tie; entries differing only in case are distinct and all
/// survive.
pub(crate) fn normalize_names(names: &mut Vec<ImportedName>) {
    names.sort_by(|a, b| {
        (a.name.cow_to_lowercase(), a.alias.as_deref())
            .cmp(&(b.name.cow_to_lowercase(), b.alias.as_deref()))
    });
    names.dedup();
}

/// Sort each declaration's names, attach sort keys, and order the whole
/// sequence. The sort is stable: declarations with identical keys keep their
/// original relative order.
pub(crate) fn sort_imports(decls: Vec<ImportDecl>, config: &Config) -> Vec<OrderedImport> {
    let mut imports: Vec<OrderedImport> = decls
        .into_iter()
        .map(|mut decl| {
            normalize_names(decl.names_mut());
            let key = sort_key(&decl, &config.defer);
            log::trace!("assigned {key:?} to {decl:?}");
            OrderedImport { key, decl }
        })
        .collect();
    imports.sort_by(|a, b| cmp_keys(&a.key, &b.key, config.relative_order));
    debug!("sorted {} import declarations", imports.len());
    imports
}

/// Compute the composite key. Call only after the declaration's own names
/// have been normalized; the fallback `name` is the first member.
fn sort_key(decl: &ImportDecl, defer: &[String]) -> SortKey {
    let rank = if decl.is_future() {
        Rank::Future
    } else {
        Rank::Normal
    };
    let (level, module) = match decl {
        ImportDecl::Import { .. } => (0, None),
        ImportDecl::ImportFrom { level, module, .. } => (*level, module.as_deref()),
    };
    let name = module.map_or_else(
        || {
            decl.names()
                .first()
                .map_or_else(String::new, |first| first.name.to_lowercase())
        },
        str::to_lowercase,
    );
    SortKey {
        rank,
        level,
        bucket: module.map_or(0, |module| defer_bucket(module, defer)),
        name,
    }
}

/// First matching prefix wins. A prefix matches when it equals the module
/// path or is followed in it by a `.` segment boundary, so `ast` defers
/// `ast.helpers` but never `astroid`.
fn defer_bucket(module: &str, defer: &[String]) -> usize {
    defer
        .iter()
        .position(|prefix| {
            module == prefix.as_str()
                || module
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
        .map_or(0, |index| index + 1)
}

fn cmp_keys(a: &SortKey, b: &SortKey, relative_order: RelativeOrder) -> Ordering {
    a.rank
        .cmp(&b.rank)
        .then_with(|| cmp_levels(a.level, b.level, relative_order))
        .then_with(|| a.bucket.cmp(&b.bucket))
        .then_with(|| a.name.cmp(&b.name))
}

/// Compare relative-import levels per the configured direction.
fn cmp_levels(level1: u32, level2: u32, relative_order: RelativeOrder) -> Ordering {
    match relative_order {
        RelativeOrder::ClosestToFurthest => level1.cmp(&level2),
        RelativeOrder::FurthestToClosest => level2.cmp(&level1),
    }
}

#[cfg(test)]
mod tests;
