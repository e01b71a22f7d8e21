//! no-unused-styles: style keys declared in a collection but never referenced.

use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::imports::resolve_imported_styles;
use crate::styles::matchers::{
    attribute_expression, collection_name, declared_keys, is_style_attribute, is_style_sheet_factory_call,
};
use crate::styles::{AliasTable, CollectionOrigin, ReferenceCollector, StyleRegistry};

pub const NAME: &str = "no-unused-styles";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Follow relative imports and check collections declared in other files.
    pub enable_imports_check: bool,
}

pub struct NoUnusedStyles;

impl Rule for NoUnusedStyles {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Report style keys that are declared but never referenced",
            fixable: false,
            has_suggestions: false,
        }
    }

    fn create(&self, config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        Ok(Box::new(UnusedStylesVisitor { options, ..UnusedStylesVisitor::default() }))
    }
}

#[derive(Default)]
struct UnusedStylesVisitor {
    options: Options,
    registry: StyleRegistry,
    member_uses: Vec<NodeId>,
    style_values: Vec<NodeId>,
    imports: Vec<NodeId>,
    has_component: bool,
}

impl RuleVisitor for UnusedStylesVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        let style = ctx.style_settings();
        match ast.kind(node) {
            NodeKind::CallExpression { .. } => {
                if is_style_sheet_factory_call(ast, node, &style.factory_names) {
                    let name = collection_name(ast, node);
                    self.registry
                        .register(name.as_str(), declared_keys(ast, node, ctx.constants()));
                } else if is_component_factory(ast, node) {
                    self.has_component = true;
                }
            }
            NodeKind::MemberExpression { .. } => self.member_uses.push(node),
            NodeKind::JsxAttribute { .. } if is_style_attribute(ast, node, style.attribute_match) => {
                self.style_values.extend(attribute_expression(ast, node));
            }
            NodeKind::JsxElement { .. } => self.has_component = true,
            NodeKind::Other { kind, .. } if kind == "class_heritage" => {
                if ast.text(node).contains("Component") {
                    self.has_component = true;
                }
            }
            NodeKind::ImportDeclaration { .. } if self.options.enable_imports_check => self.imports.push(node),
            _ => {}
        }
    }

    fn finish(&mut self, ctx: &RuleContext<'_>) {
        let ast = ctx.ast();
        for import in std::mem::take(&mut self.imports) {
            self.register_imported(ctx, import);
        }
        if !self.has_component {
            return;
        }

        let registry = &mut self.registry;
        let aliases = AliasTable::build(ast, |name| registry.contains(name), ctx.constants());
        let collector = ReferenceCollector::new(ast, &aliases, ctx.constants());

        for &member in &self.member_uses {
            if is_object_of_member(ast, member) {
                continue;
            }
            if let Some(reference) = collector.member_reference(member) {
                registry.mark_used(&reference);
            }
        }
        for &value in &self.style_values {
            for reference in collector.collect(value) {
                registry.mark_used(&reference);
            }
        }
        if !aliases.is_empty() {
            for (id, node) in ast.iter() {
                let NodeKind::Identifier { name } = &node.kind else {
                    continue;
                };
                if aliases.is_binding_site(id) || !is_value_position(ast, id) {
                    continue;
                }
                if let Some(reference) = aliases.resolve(name) {
                    registry.mark_used(reference);
                }
            }
        }

        for collection in registry.unused_declarations() {
            for declaration in &collection.declarations {
                let message = format!("Unused style detected: {}.{}", collection.name, declaration.key);
                match collection.origin {
                    CollectionOrigin::Local => ctx.report_span(declaration.span, message, None, Vec::new()),
                    CollectionOrigin::Imported { specifier } => ctx.report(specifier, message),
                }
            }
        }
    }
}

impl UnusedStylesVisitor {
    /// Register collections pulled in by one import under their local names,
    /// or report why the imported module could not be read.
    fn register_imported(&mut self, ctx: &RuleContext<'_>, import: NodeId) {
        let ast = ctx.ast();
        let NodeKind::ImportDeclaration { source, specifiers } = ast.kind(import) else {
            return;
        };
        let services = ctx.imports();
        let Some(map) =
            resolve_imported_styles(source, ctx.path(), services.resolver, services.cache, services.settings)
        else {
            return;
        };
        if map.has_errors() {
            let errors = map
                .errors
                .iter()
                .map(|e| format!("{} ({}:{})", e.message, e.line, e.column))
                .collect::<Vec<_>>()
                .join(", ");
            ctx.report(import, format!("Parse errors in imported module '{source}': {errors}"));
            return;
        }
        for &specifier in specifiers {
            let (imported, local) = match ast.kind(specifier) {
                NodeKind::ImportDefaultSpecifier { local } => ("default", *local),
                NodeKind::ImportSpecifier { imported, local } => (imported.as_str(), *local),
                _ => continue,
            };
            let declarations = map.styles_by_imported_name(imported);
            if declarations.is_empty() {
                continue;
            }
            if let Some(local_name) = ast.identifier_name(local) {
                self.registry.register_with_origin(
                    local_name,
                    declarations.to_vec(),
                    CollectionOrigin::Imported { specifier },
                );
            }
        }
    }
}

/// `React.createClass(...)` or `createReactClass(...)`.
fn is_component_factory(ast: &Ast, call: NodeId) -> bool {
    let NodeKind::CallExpression { callee, .. } = ast.kind(call) else {
        return false;
    };
    match ast.kind(*callee) {
        NodeKind::Identifier { name } => name == "createReactClass",
        NodeKind::MemberExpression { property, computed: false, .. } => {
            ast.identifier_name(*property) == Some("createClass")
        }
        _ => false,
    }
}

/// `styles.text` inside `styles.text.color` is not itself a use.
fn is_object_of_member(ast: &Ast, member: NodeId) -> bool {
    ast.parent(member).is_some_and(|parent| {
        matches!(ast.kind(parent), NodeKind::MemberExpression { object, .. } if *object == member)
    })
}

/// Whether an identifier is read as a value, not a property name, key, or binding.
fn is_value_position(ast: &Ast, id: NodeId) -> bool {
    let Some(parent) = ast.parent(id) else {
        return true;
    };
    match ast.kind(parent) {
        NodeKind::MemberExpression { property, computed: false, .. } => *property != id,
        NodeKind::Property { key, computed: false, .. } => *key != id,
        NodeKind::VariableDeclarator { id: binding, .. } => *binding != id,
        NodeKind::ImportSpecifier { .. }
        | NodeKind::ImportDefaultSpecifier { .. }
        | NodeKind::ImportNamespaceSpecifier { .. } => false,
        _ => true,
    }
}
