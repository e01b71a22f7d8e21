//! Reference Collector: which `collection.key` paths an expression can denote.

use std::fmt;

use smallvec::SmallVec;

use rnlint_core::types::collections::FxHashMap;

use super::constants::ConstantTable;
use super::matchers::property_key_name;
use crate::ast::{Ast, NodeId, NodeKind};

/// A fully qualified `collection.key` path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    pub collection: String,
    pub key: String,
}

impl Reference {
    pub fn new(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Self { collection: collection.into(), key: key.into() }
    }

    /// Split `styles.text` at the first dot.
    pub fn parse(qualified: &str) -> Option<Self> {
        let (collection, key) = qualified.split_once('.')?;
        if collection.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self::new(collection, key))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection, self.key)
    }
}

/// Locals destructured from a known collection: `const { a, b: c } = styles`
/// binds `a → styles.a` and `c → styles.b`.
///
/// Bindings are file-wide; block scoping is not modelled.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: FxHashMap<String, Reference>,
    /// Identifier nodes that declare an alias (not uses of it).
    binding_sites: Vec<NodeId>,
}

impl AliasTable {
    pub fn build(ast: &Ast, is_collection: impl Fn(&str) -> bool, constants: &ConstantTable) -> Self {
        let mut table = Self::default();
        for (_, node) in ast.iter() {
            let NodeKind::VariableDeclarator { id, init: Some(init) } = &node.kind else {
                continue;
            };
            let Some(collection) = ast.identifier_name(*init).filter(|n| is_collection(n)) else {
                continue;
            };
            let NodeKind::ObjectPattern { properties } = ast.kind(*id) else {
                continue;
            };
            for &property in properties {
                let NodeKind::Property { value, .. } = ast.kind(property) else {
                    continue;
                };
                let Some(key) = property_key_name(ast, property, constants) else {
                    continue;
                };
                let local = match ast.kind(*value) {
                    NodeKind::AssignmentPattern { left, .. } => *left,
                    _ => *value,
                };
                if let Some(local_name) = ast.identifier_name(local) {
                    table
                        .aliases
                        .insert(local_name.to_string(), Reference::new(collection, key));
                    table.binding_sites.push(local);
                }
            }
        }
        table
    }

    pub fn resolve(&self, local: &str) -> Option<&Reference> {
        self.aliases.get(local)
    }

    pub fn is_binding_site(&self, id: NodeId) -> bool {
        self.binding_sites.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Resolves attribute value expressions to the references they can denote.
///
/// Handled shapes: member access, array literals, `&&`/`||`/`??`, ternaries,
/// identifiers bound by an [`AliasTable`], and `{...}` containers. Every other
/// shape (calls, templates, unknown chains) yields no reference.
pub struct ReferenceCollector<'a> {
    ast: &'a Ast,
    aliases: &'a AliasTable,
    constants: &'a ConstantTable,
}

impl<'a> ReferenceCollector<'a> {
    pub fn new(ast: &'a Ast, aliases: &'a AliasTable, constants: &'a ConstantTable) -> Self {
        Self { ast, aliases, constants }
    }

    /// Distinct references in first-seen order.
    pub fn collect(&self, expression: NodeId) -> Vec<Reference> {
        let mut out: SmallVec<[Reference; 4]> = SmallVec::new();
        self.visit(expression, &mut out);
        let mut unique = Vec::with_capacity(out.len());
        for reference in out {
            if !unique.contains(&reference) {
                unique.push(reference);
            }
        }
        unique
    }

    fn visit(&self, id: NodeId, out: &mut SmallVec<[Reference; 4]>) {
        match self.ast.kind(id) {
            NodeKind::JsxExpressionContainer { expression: Some(inner) } => self.visit(*inner, out),
            NodeKind::MemberExpression { .. } => out.extend(self.member_reference(id)),
            NodeKind::ArrayExpression { elements } => {
                for &element in elements {
                    self.visit(element, out);
                }
            }
            NodeKind::LogicalExpression { left, right, .. } => {
                self.visit(*left, out);
                self.visit(*right, out);
            }
            NodeKind::ConditionalExpression { consequent, alternate, .. } => {
                self.visit(*consequent, out);
                self.visit(*alternate, out);
            }
            NodeKind::Identifier { name } => out.extend(self.aliases.resolve(name).cloned()),
            _ => {}
        }
    }

    /// `obj.key` or `obj[<constant>]`. An `obj` bound to an alias resolves to
    /// the aliased key itself.
    pub fn member_reference(&self, member: NodeId) -> Option<Reference> {
        let NodeKind::MemberExpression { object, property, computed, .. } = self.ast.kind(member) else {
            return None;
        };
        let object_name = self.ast.identifier_name(*object)?;
        if let Some(alias) = self.aliases.resolve(object_name) {
            return Some(alias.clone());
        }
        let key = if *computed {
            self.constants.fold(self.ast, *property)?
        } else {
            self.ast.identifier_name(*property)?.to_string()
        };
        Some(Reference::new(object_name, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_source;
    use crate::styles::matchers::attribute_expression;
    use std::path::Path;

    fn style_value(ast: &Ast) -> NodeId {
        let (attr, _) = ast
            .iter()
            .find(|(_, n)| matches!(&n.kind, NodeKind::JsxAttribute { name, .. } if name == "style"))
            .unwrap();
        attribute_expression(ast, attr).unwrap()
    }

    fn collect(source: &str) -> Vec<String> {
        let ast = parse_source(source, Path::new("r.js")).unwrap();
        let constants = ConstantTable::build(&ast);
        let aliases = AliasTable::build(&ast, |n| n == "styles", &constants);
        let collector = ReferenceCollector::new(&ast, &aliases, &constants);
        collector.collect(style_value(&ast)).iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn both_ternary_branches_are_reachable() {
        assert_eq!(
            collect("<Text style={[styles.text, cond ? styles.a : styles.b]} />"),
            vec!["styles.text", "styles.a", "styles.b"]
        );
    }

    #[test]
    fn logical_operands_are_unioned() {
        assert_eq!(
            collect("<Text style={a && b && styles.text || styles.other} />"),
            vec!["styles.text", "styles.other"]
        );
    }

    #[test]
    fn aliases_resolve_to_their_collection_key() {
        assert_eq!(
            collect("const { text, box: container = {} } = styles;\n<View style={[text, container]} />"),
            vec!["styles.text", "styles.box"]
        );
    }

    #[test]
    fn computed_constant_keys_resolve() {
        assert_eq!(collect("const k = 'name';\n<View style={styles[k]} />"), vec!["styles.name"]);
    }

    #[test]
    fn opaque_shapes_contribute_nothing() {
        assert!(collect("<View style={getStyle(styles.a)} />").is_empty());
        assert!(collect("<View style={`${styles.a}`} />").is_empty());
        assert!(collect("<View style={a.b.c} />").is_empty());
    }

    #[test]
    fn parse_splits_at_first_dot() {
        assert_eq!(Reference::parse("styles.text"), Some(Reference::new("styles", "text")));
        assert_eq!(Reference::parse("styles"), None);
    }
}
