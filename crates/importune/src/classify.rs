//! Traversal of the module's top-level statements
//!
//! Only `import` and `from ... import` statements at module scope are
//! collected; everything else, including imports nested in functions,
//! classes or `try` blocks, is left alone.

use log::debug;
use ruff_python_ast::{Alias, ModModule, Stmt};

use crate::types::{ImportDecl, ImportedName};

/// Collect every top-level import statement of `module`, in source order.
pub(crate) fn classify_imports(module: &ModModule) -> Vec<ImportDecl> {
    let mut decls = Vec::new();
    for stmt in &module.body {
        match stmt {
            Stmt::Import(import) => {
                decls.push(ImportDecl::Import {
                    names: imported_names(&import.names),
                });
            }
            Stmt::ImportFrom(import_from) => {
                decls.push(ImportDecl::ImportFrom {
                    level: import_from.level,
                    module: import_from
                        .module
                        .as_ref()
                        .map(|module| module.as_str().to_string()),
                    names: imported_names(&import_from.names),
                });
            }
            _ => {}
        }
    }
    debug!("classified {} top-level import declarations", decls.len());
    decls
}

/// Convert the parser's name/alias pairs. A star import arrives here as the
/// ordinary name `*`.
fn imported_names(aliases: &[Alias]) -> Vec<ImportedName> {
    aliases
        .iter()
        .map(|alias| ImportedName {
            name: alias.name.as_str().to_string(),
            alias: alias
                .asname
                .as_ref()
                .map(|asname| asname.as_str().to_string()),
        })
        .collect()
}
