//! Tests for name normalization and declaration ordering

use super::*;

fn name(name: &str) -> ImportedName {
    ImportedName {
        name: name.to_string(),
        alias: None,
    }
}

fn aliased(name: &str, alias: &str) -> ImportedName {
    ImportedName {
        name: name.to_string(),
        alias: Some(alias.to_string()),
    }
}

fn plain(names: &[&str]) -> ImportDecl {
    ImportDecl::Import {
        names: names.iter().copied().map(name).collect(),
    }
}

fn qualified(level: u32, module: Option<&str>, names: &[&str]) -> ImportDecl {
    ImportDecl::ImportFrom {
        level,
        module: module.map(str::to_string),
        names: names.iter().copied().map(name).collect(),
    }
}

fn deferring(defer: &[&str]) -> Config {
    Config {
        defer: defer.iter().map(|prefix| (*prefix).to_string()).collect(),
        ..Config::default()
    }
}

fn modules(sorted: &[OrderedImport]) -> Vec<String> {
    sorted.iter().map(|import| import.key.name.clone()).collect()
}

#[test]
fn test_normalize_orders_case_insensitively_with_alias_tiebreak() {
    let mut names = vec![
        aliased("path", "p"),
        name("Expr"),
        name("parse"),
        name("path"),
    ];
    normalize_names(&mut names);

    // Absent alias sorts before present when the names tie
    assert_eq!(
        names,
        vec![name("Expr"), name("parse"), name("path"), aliased("path", "p")]
    );
}

#[test]
fn test_normalize_drops_exact_duplicates_only() {
    let mut names = vec![
        name("parse"),
        name("parse"),
        name("Parse"),
        aliased("parse", "p"),
        aliased("parse", "p"),
    ];
    normalize_names(&mut names);

    assert_eq!(
        names,
        vec![name("parse"), name("Parse"), aliased("parse", "p")]
    );
}

#[test]
fn test_future_sorts_first() {
    let sorted = sort_imports(
        vec![
            plain(&["__aardvark"]),
            qualified(0, Some("__future__"), &["annotations"]),
        ],
        &Config::default(),
    );

    // Rank beats the name comparison that would favor `__aardvark`
    assert_eq!(sorted[0].key.rank, Rank::Future);
    assert_eq!(modules(&sorted), vec!["__future__", "__aardvark"]);
}

#[test]
fn test_deferred_prefixes_bucket_in_caller_order() {
    let sorted = sort_imports(
        vec![
            qualified(0, Some("wsgiref"), &["a"]),
            qualified(0, Some("ast.helpers"), &["b"]),
            qualified(0, Some("zlib"), &["c"]),
        ],
        &deferring(&["ast", "wsgiref"]),
    );

    assert_eq!(modules(&sorted), vec!["zlib", "ast.helpers", "wsgiref"]);
    assert_eq!(
        sorted.iter().map(|i| i.key.bucket).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_defer_respects_segment_boundaries() {
    let sorted = sort_imports(
        vec![
            qualified(0, Some("ast"), &["parse"]),
            qualified(0, Some("astroid"), &["nodes"]),
        ],
        &deferring(&["ast"]),
    );

    // `astroid` is not under the `ast` prefix, so it keeps bucket 0
    assert_eq!(modules(&sorted), vec!["astroid", "ast"]);
}

#[test]
fn test_empty_prefix_matches_nothing() {
    let sorted = sort_imports(vec![qualified(0, Some("os"), &["sep"])], &deferring(&[""]));

    assert_eq!(sorted[0].key.bucket, 0);
}

#[test]
fn test_plain_imports_never_defer() {
    let sorted = sort_imports(
        vec![qualified(0, Some("ast"), &["parse"]), plain(&["ast"])],
        &deferring(&["ast"]),
    );

    // The plain import has no module string to match, so it stays ahead
    assert_eq!(sorted[0].key.bucket, 0);
    assert!(matches!(sorted[0].decl, ImportDecl::Import { .. }));
    assert_eq!(sorted[1].key.bucket, 1);
}

#[test]
fn test_relative_levels_sort_ascending_by_default() {
    let decls = vec![
        qualified(2, Some("deep"), &["x"]),
        qualified(0, Some("absolute"), &["y"]),
        qualified(1, Some("shallow"), &["z"]),
    ];

    let sorted = sort_imports(decls.clone(), &Config::default());
    assert_eq!(
        sorted.iter().map(|i| i.key.level).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    let reversed = sort_imports(
        decls,
        &Config {
            relative_order: RelativeOrder::FurthestToClosest,
            ..Config::default()
        },
    );
    assert_eq!(
        reversed.iter().map(|i| i.key.level).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
}

#[test]
fn test_equal_keys_preserve_source_order() {
    let sorted = sort_imports(
        vec![
            qualified(0, Some("pkg"), &["second"]),
            qualified(0, Some("pkg"), &["first"]),
        ],
        &Config::default(),
    );

    assert_eq!(sorted[0].decl.names()[0].name, "second");
    assert_eq!(sorted[1].decl.names()[0].name, "first");
}

#[test]
fn test_module_less_relative_keys_on_first_member() {
    let sorted = sort_imports(
        vec![qualified(2, None, &["zeta", "Alpha"])],
        &Config::default(),
    );

    // Names are normalized before the key is derived
    assert_eq!(sorted[0].key.name, "alpha");
}
