//! File-level constant folding for computed style keys.

use rnlint_core::types::collections::FxHashMap;

use crate::ast::{Ast, DeclarationKind, NodeId, NodeKind};
use crate::parsers::text::number_literal_to_string;

/// String values of top-level `const name = <foldable>` bindings.
///
/// Foldable: string and number literals, identifiers bound earlier in this
/// table, and template literals whose substitutions are themselves foldable.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: FxHashMap<String, String>,
}

impl ConstantTable {
    pub fn build(ast: &Ast) -> Self {
        let mut table = Self::default();
        let NodeKind::Program { body } = ast.kind(ast.root()) else {
            return table;
        };
        for &statement in body {
            let declaration = match ast.kind(statement) {
                NodeKind::ExportNamedDeclaration { declaration: Some(d), .. } => *d,
                _ => statement,
            };
            let NodeKind::VariableDeclaration { kind: DeclarationKind::Const, declarators } = ast.kind(declaration) else {
                continue;
            };
            for &declarator in declarators {
                let NodeKind::VariableDeclarator { id, init: Some(init) } = ast.kind(declarator) else {
                    continue;
                };
                let Some(name) = ast.identifier_name(*id) else {
                    continue;
                };
                if let Some(value) = table.fold(ast, *init) {
                    table.values.insert(name.to_string(), value);
                }
            }
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fold an expression to the string it evaluates to as a property key.
    pub fn fold(&self, ast: &Ast, id: NodeId) -> Option<String> {
        match ast.kind(id) {
            NodeKind::StringLiteral { value } => Some(value.clone()),
            NodeKind::NumberLiteral { raw } => Some(number_literal_to_string(raw)),
            NodeKind::Identifier { name } => self.get(name).map(str::to_string),
            NodeKind::TemplateLiteral { quasis, expressions } => {
                let mut out = String::new();
                for (i, quasi) in quasis.iter().enumerate() {
                    out.push_str(quasi);
                    if let Some(&expr) = expressions.get(i) {
                        out.push_str(&self.fold(ast, expr)?);
                    }
                }
                Some(out)
            }
            _ => None,
        }
    }
}
