//! Style collections and export bindings of one imported module.

use std::path::Path;
use std::time::SystemTime;

use rnlint_core::errors::ParseError;
use rnlint_core::types::collections::FxHashMap;

use crate::ast::{Ast, NodeKind};
use crate::parsers::parse_source;
use crate::styles::matchers::{declared_keys, is_style_sheet_factory_call};
use crate::styles::{ConstantTable, StyleDeclaration};

/// A problem found while reading an imported module, surfaced on the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleError {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl ModuleError {
    fn from_parse_error(error: &ParseError) -> Self {
        match error {
            ParseError::Syntax { kind, line, column, .. } => {
                let message = match kind.strip_prefix("MISSING ") {
                    Some(missing) => format!("Missing {missing}"),
                    None => "Unexpected token".to_string(),
                };
                Self { message, line: *line, column: *column }
            }
            other => Self { message: other.to_string(), line: 0, column: 0 },
        }
    }
}

/// What a module contributes to cross-file analysis.
#[derive(Debug, Clone, Default)]
pub struct StylesMap {
    /// Collections declared in the module, by binding name (`default` for an
    /// anonymous default export).
    pub local_styles: FxHashMap<String, Vec<StyleDeclaration>>,
    /// Exported name → local binding name.
    pub exports: FxHashMap<String, String>,
    pub errors: Vec<ModuleError>,
    /// Modification time of the file this map was built from.
    pub mtime: Option<SystemTime>,
}

impl StylesMap {
    /// Parse `content` and collect its collections and exports. A parse
    /// failure yields an empty map carrying the error.
    pub fn parse(path: &Path, content: &str, factory_names: &[String]) -> Self {
        match parse_source(content, path) {
            Ok(ast) => Self::from_ast(&ast, factory_names),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "imported module failed to parse");
                Self {
                    errors: vec![ModuleError::from_parse_error(&error)],
                    ..Self::default()
                }
            }
        }
    }

    pub fn from_ast(ast: &Ast, factory_names: &[String]) -> Self {
        let constants = ConstantTable::build(ast);
        let mut map = Self::default();
        for (_, node) in ast.iter() {
            match &node.kind {
                NodeKind::VariableDeclarator { id, init: Some(init) }
                    if is_style_sheet_factory_call(ast, *init, factory_names) =>
                {
                    if let Some(name) = ast.identifier_name(*id) {
                        map.local_styles
                            .insert(name.to_string(), declared_keys(ast, *init, &constants));
                    }
                }
                NodeKind::ExportNamedDeclaration { declaration, specifiers, .. } => {
                    if let Some(declaration) = declaration {
                        if let NodeKind::VariableDeclaration { declarators, .. } = ast.kind(*declaration) {
                            for &declarator in declarators {
                                let NodeKind::VariableDeclarator { id, .. } = ast.kind(declarator) else {
                                    continue;
                                };
                                if let Some(name) = ast.identifier_name(*id) {
                                    map.add_export(name, name);
                                }
                            }
                        }
                    }
                    for &specifier in specifiers {
                        if let NodeKind::ExportSpecifier { local, exported } = ast.kind(specifier) {
                            map.add_export(exported, local);
                        }
                    }
                }
                NodeKind::ExportDefaultDeclaration { declaration } => match ast.kind(*declaration) {
                    NodeKind::Identifier { name } => map.add_export("default", name),
                    NodeKind::CallExpression { .. }
                        if is_style_sheet_factory_call(ast, *declaration, factory_names) =>
                    {
                        map.local_styles
                            .insert("default".to_string(), declared_keys(ast, *declaration, &constants));
                        map.add_export("default", "default");
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        map
    }

    pub fn add_export(&mut self, exported: &str, local: &str) {
        self.exports.insert(exported.to_string(), local.to_string());
    }

    /// Declarations reachable through `imported` (`default` for default imports).
    pub fn styles_by_imported_name(&self, imported: &str) -> &[StyleDeclaration] {
        self.exports
            .get(imported)
            .and_then(|local| self.local_styles.get(local))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
