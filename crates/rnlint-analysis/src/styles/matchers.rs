//! Pure predicates and extractors over single syntax nodes.

use rnlint_core::config::{SharedSettings, StyleAttributeMatch};

use super::constants::ConstantTable;
use super::registry::StyleDeclaration;
use crate::ast::{Ast, NodeId, NodeKind};
use crate::parsers::text::number_literal_to_string;

/// The slice of shared settings the matchers need.
#[derive(Debug, Clone)]
pub struct StyleSettings {
    pub factory_names: Vec<String>,
    pub attribute_match: StyleAttributeMatch,
}

impl StyleSettings {
    pub fn from_settings(settings: &SharedSettings) -> Self {
        Self {
            factory_names: settings.effective_style_sheet_object_names(),
            attribute_match: settings.effective_style_attribute_match(),
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self::from_settings(&SharedSettings::default())
    }
}

/// Binding name of a style collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Named(String),
    /// `export default <Factory>.create(...)`
    Default,
    /// Result not bound to a single identifier (returned from a helper, passed along).
    Unresolved,
}

impl CollectionName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Default => "default",
            Self::Unresolved => "undefined",
        }
    }
}

/// `<Name>.create(...)` where `<Name>` is a recognized factory object.
pub fn is_style_sheet_factory_call(ast: &Ast, id: NodeId, factory_names: &[String]) -> bool {
    let NodeKind::CallExpression { callee, .. } = ast.kind(id) else {
        return false;
    };
    let NodeKind::MemberExpression { object, property, computed: false, .. } = ast.kind(*callee) else {
        return false;
    };
    let (Some(object), Some(property)) = (ast.identifier_name(*object), ast.identifier_name(*property)) else {
        return false;
    };
    property == "create" && factory_names.iter().any(|n| n == object)
}

/// The object literal passed to a factory call, if the first argument is one.
pub fn factory_object_argument(ast: &Ast, call: NodeId) -> Option<NodeId> {
    let NodeKind::CallExpression { arguments, .. } = ast.kind(call) else {
        return None;
    };
    let first = *arguments.first()?;
    matches!(ast.kind(first), NodeKind::ObjectExpression { .. }).then_some(first)
}

/// Name the factory call's result is bound to.
pub fn collection_name(ast: &Ast, call: NodeId) -> CollectionName {
    let Some(parent) = ast.parent(call) else {
        return CollectionName::Unresolved;
    };
    match ast.kind(parent) {
        NodeKind::VariableDeclarator { id, init: Some(init) } if *init == call => ast
            .identifier_name(*id)
            .map(|name| CollectionName::Named(name.to_string()))
            .unwrap_or(CollectionName::Unresolved),
        NodeKind::ExportDefaultDeclaration { .. } => CollectionName::Default,
        _ => CollectionName::Unresolved,
    }
}

/// Statically known name of a property key, or `None` for unfoldable computed keys.
pub fn property_key_name(ast: &Ast, property: NodeId, constants: &ConstantTable) -> Option<String> {
    let NodeKind::Property { key, computed, .. } = ast.kind(property) else {
        return None;
    };
    if *computed {
        return constants.fold(ast, *key);
    }
    match ast.kind(*key) {
        NodeKind::Identifier { name } => Some(name.clone()),
        NodeKind::StringLiteral { value } => Some(value.clone()),
        NodeKind::NumberLiteral { raw } => Some(number_literal_to_string(raw)),
        _ => None,
    }
}

/// Top-level keys of a factory call's object argument, in declaration order.
///
/// Spread entries contribute nothing. A repeated key keeps its first slot and
/// takes the later entry's position, like an object literal. A call without an
/// object literal argument declares nothing.
pub fn declared_keys(ast: &Ast, call: NodeId, constants: &ConstantTable) -> Vec<StyleDeclaration> {
    let Some(object) = factory_object_argument(ast, call) else {
        return Vec::new();
    };
    let NodeKind::ObjectExpression { properties } = ast.kind(object) else {
        return Vec::new();
    };
    let mut declarations: Vec<StyleDeclaration> = Vec::with_capacity(properties.len());
    for &property in properties {
        let Some(key) = property_key_name(ast, property, constants) else {
            continue;
        };
        let declaration = StyleDeclaration::new(ast, key, property);
        match declarations.iter_mut().find(|d| d.key == declaration.key) {
            Some(existing) => *existing = declaration,
            None => declarations.push(declaration),
        }
    }
    declarations
}

/// `Property` entries of an object literal (spreads and methods skipped).
pub fn object_properties(ast: &Ast, object: NodeId) -> Vec<NodeId> {
    match ast.kind(object) {
        NodeKind::ObjectExpression { properties } => properties
            .iter()
            .copied()
            .filter(|p| matches!(ast.kind(*p), NodeKind::Property { .. }))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn property_value(ast: &Ast, property: NodeId) -> Option<NodeId> {
    match ast.kind(property) {
        NodeKind::Property { value, .. } => Some(*value),
        _ => None,
    }
}

/// A JSX attribute whose name carries styles under the configured heuristic.
pub fn is_style_attribute(ast: &Ast, id: NodeId, attribute_match: StyleAttributeMatch) -> bool {
    match ast.kind(id) {
        NodeKind::JsxAttribute { name, .. } => attribute_match.matches(name),
        _ => false,
    }
}

/// Value of a JSX attribute, looking through the `{...}` container.
pub fn attribute_expression(ast: &Ast, attribute: NodeId) -> Option<NodeId> {
    let NodeKind::JsxAttribute { value: Some(value), .. } = ast.kind(attribute) else {
        return None;
    };
    match ast.kind(*value) {
        NodeKind::JsxExpressionContainer { expression } => *expression,
        _ => Some(*value),
    }
}

/// Literal, signed number literal, or a ternary with at least one literal branch.
pub fn is_literal_like(ast: &Ast, value: NodeId) -> bool {
    match ast.kind(value) {
        NodeKind::ConditionalExpression { consequent, alternate, .. } => {
            ast.kind(*consequent).is_literal() || ast.kind(*alternate).is_literal()
        }
        _ => is_plain_literal(ast, value),
    }
}

/// Literal or sign-prefixed number literal (`-7`, `+12`); the values a
/// hoisting fix can move verbatim.
pub fn is_plain_literal(ast: &Ast, value: NodeId) -> bool {
    match ast.kind(value) {
        NodeKind::UnaryExpression { operator, argument } => {
            matches!(operator.as_str(), "-" | "+") && matches!(ast.kind(*argument), NodeKind::NumberLiteral { .. })
        }
        kind => kind.is_literal(),
    }
}

/// Properties whose key contains "color" (any case) and whose value is literal-like.
pub fn color_literal_properties(ast: &Ast, object: NodeId, constants: &ConstantTable) -> Vec<NodeId> {
    object_properties(ast, object)
        .into_iter()
        .filter(|&property| {
            let is_color_key = property_key_name(ast, property, constants)
                .is_some_and(|key| key.to_ascii_lowercase().contains("color"));
            is_color_key && property_value(ast, property).is_some_and(|v| is_literal_like(ast, v))
        })
        .collect()
}

/// Object literals an attribute value can evaluate to, through conditional,
/// logical and array composition.
pub fn style_object_expressions(ast: &Ast, value: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_style_objects(ast, value, &mut out);
    out
}

fn collect_style_objects(ast: &Ast, id: NodeId, out: &mut Vec<NodeId>) {
    match ast.kind(id) {
        NodeKind::ObjectExpression { .. } => out.push(id),
        NodeKind::JsxExpressionContainer { expression: Some(inner) } => collect_style_objects(ast, *inner, out),
        NodeKind::ArrayExpression { elements } => {
            for &element in elements {
                collect_style_objects(ast, element, out);
            }
        }
        NodeKind::LogicalExpression { left, right, .. } => {
            collect_style_objects(ast, *left, out);
            collect_style_objects(ast, *right, out);
        }
        NodeKind::ConditionalExpression { consequent, alternate, .. } => {
            collect_style_objects(ast, *consequent, out);
            collect_style_objects(ast, *alternate, out);
        }
        _ => {}
    }
}

/// Nearest enclosing JSX element of `id` (the node itself excluded).
pub fn enclosing_element(ast: &Ast, id: NodeId) -> Option<NodeId> {
    ast.ancestors(id)
        .find(|&a| matches!(ast.kind(a), NodeKind::JsxElement { .. }))
}

/// Qualified tag name of a JSX element (`Animated.Text`).
pub fn element_name(ast: &Ast, element: NodeId) -> Option<String> {
    let NodeKind::JsxElement { opening, .. } = ast.kind(element) else {
        return None;
    };
    match ast.kind(*opening) {
        NodeKind::JsxOpeningElement { name, .. } => Some(name.qualified()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::walk::descendants;
    use crate::parsers::parse_source;
    use std::path::Path;

    fn parse(source: &str) -> Ast {
        parse_source(source, Path::new("m.js")).unwrap()
    }

    fn find_calls(ast: &Ast) -> Vec<NodeId> {
        descendants(ast, ast.root())
            .into_iter()
            .filter(|id| matches!(ast.kind(*id), NodeKind::CallExpression { .. }))
            .collect()
    }

    fn names() -> Vec<String> {
        vec!["StyleSheet".to_string(), "OtherStyleSheet".to_string()]
    }

    #[test]
    fn recognizes_configured_factories() {
        let ast = parse("const a = StyleSheet.create({}); const b = OtherStyleSheet.create({}); const c = Foo.create({});");
        let calls = find_calls(&ast);
        let matched: Vec<bool> = calls
            .iter()
            .map(|c| is_style_sheet_factory_call(&ast, *c, &names()))
            .collect();
        assert_eq!(matched, vec![true, true, false]);
    }

    #[test]
    fn names_bound_default_and_unresolved_collections() {
        let ast = parse(
            "const styles = StyleSheet.create({});\nexport default StyleSheet.create({});\nconst make = () => StyleSheet.create({});",
        );
        let names: Vec<String> = find_calls(&ast)
            .into_iter()
            .map(|c| collection_name(&ast, c).as_str().to_string())
            .collect();
        assert_eq!(names, vec!["styles", "default", "undefined"]);
    }

    #[test]
    fn declared_keys_skip_spreads_and_fold_constants() {
        let ast = parse(
            "const k = 'dyn';\nconst styles = StyleSheet.create({ a: {}, ...extra, 'b': {}, [k]: {}, [unknown]: {}, 3: {} });",
        );
        let constants = ConstantTable::build(&ast);
        let call = find_calls(&ast)[0];
        let keys: Vec<String> = declared_keys(&ast, call, &constants).into_iter().map(|d| d.key).collect();
        assert_eq!(keys, vec!["a", "b", "dyn", "3"]);
    }

    #[test]
    fn malformed_factory_calls_declare_nothing() {
        let ast = parse("const a = StyleSheet.create();\nconst b = StyleSheet.create(other);");
        let constants = ConstantTable::build(&ast);
        for call in find_calls(&ast) {
            assert!(declared_keys(&ast, call, &constants).is_empty());
        }
    }

    #[test]
    fn color_properties_need_literal_values() {
        let ast = parse("const s = { backgroundColor: '#fff', color: red, borderColor: x ? 'a' : b, opacity: 1 };");
        let constants = ConstantTable::build(&ast);
        let object = descendants(&ast, ast.root())
            .into_iter()
            .find(|id| matches!(ast.kind(*id), NodeKind::ObjectExpression { .. }))
            .unwrap();
        let keys: Vec<String> = color_literal_properties(&ast, object, &constants)
            .into_iter()
            .filter_map(|p| property_key_name(&ast, p, &constants))
            .collect();
        assert_eq!(keys, vec!["backgroundColor", "borderColor"]);
    }
}
