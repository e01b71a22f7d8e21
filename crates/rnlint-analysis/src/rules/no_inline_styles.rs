//! no-inline-styles: object literals passed straight to a style attribute.

use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::diagnostics::{Fix, TextEdit};
use crate::styles::matchers::{
    attribute_expression, factory_object_argument, is_plain_literal, is_style_attribute,
    is_style_sheet_factory_call, object_properties, property_key_name, style_object_expressions,
};
use crate::styles::InspectedObject;

pub const NAME: &str = "no-inline-styles";

const SUGGESTION: &str = "Move the inline style into the style sheet";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Objects with fewer properties than this are allowed inline.
    pub allow_style_properties_less_than: Option<usize>,
}

pub struct NoInlineStyles;

impl Rule for NoInlineStyles {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Report object literals used directly as style attribute values",
            fixable: false,
            has_suggestions: true,
        }
    }

    fn create(&self, config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        Ok(Box::new(InlineStylesVisitor { options }))
    }
}

struct InlineStylesVisitor {
    options: Options,
}

impl RuleVisitor for InlineStylesVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        if !is_style_attribute(ast, node, ctx.style_settings().attribute_match) {
            return;
        }
        let Some(value) = attribute_expression(ast, node) else {
            return;
        };
        for object in style_object_expressions(ast, value) {
            let properties = object_properties(ast, object);
            if let Some(threshold) = self.options.allow_style_properties_less_than {
                if properties.len() < threshold {
                    continue;
                }
            }
            let inspected = InspectedObject::from_properties(ast, &properties, ctx.constants());
            if inspected.is_empty() {
                continue;
            }
            let expression = inspected.to_string();
            let suggestions = hoist_suggestion(ctx, object, &inspected).into_iter().collect();
            ctx.report_span(ast.span(object), format!("Inline style: {expression}"), None, suggestions);
        }
    }
}

/// Replace the literal with `styles.<element>Style` and add that key to the
/// file's `styles` collection, creating the collection when there is none.
///
/// Only offered when the rendered object carries every property of the literal.
fn hoist_suggestion(ctx: &RuleContext<'_>, object: NodeId, inspected: &InspectedObject) -> Option<Fix> {
    let ast = ctx.ast();
    let NodeKind::ObjectExpression { properties } = ast.kind(object) else {
        return None;
    };
    let all_literal = properties.iter().all(|&p| match ast.kind(p) {
        NodeKind::Property { value, .. } => {
            is_plain_literal(ast, *value) && property_key_name(ast, p, ctx.constants()).is_some()
        }
        _ => false,
    });
    if !all_literal || inspected.len() != properties.len() {
        return None;
    }
    let expression = inspected.to_string();

    let element = ast
        .ancestors(object)
        .find_map(|a| match ast.kind(a) {
            NodeKind::JsxOpeningElement { name, .. } => Some(name),
            _ => None,
        })?
        .last()?;
    let style_name = format!("{}Style", element.to_lowercase());
    let entry = format!("{style_name}: {expression}");

    let insertion = insertion_point(ast, ctx, &entry)?;
    let span = ast.span(object);
    if insertion.span.start > span.start && insertion.span.start < span.end {
        return None;
    }

    Some(Fix::new(
        SUGGESTION,
        vec![TextEdit::replace(span, format!("styles.{style_name}")), insertion],
    ))
}

fn insertion_point(ast: &Ast, ctx: &RuleContext<'_>, entry: &str) -> Option<TextEdit> {
    let NodeKind::Program { body } = ast.kind(ast.root()) else {
        return None;
    };
    let factories = &ctx.style_settings().factory_names;

    let existing = body.iter().find_map(|&statement| {
        let NodeKind::VariableDeclaration { declarators, .. } = ast.kind(statement) else {
            return None;
        };
        let first = *declarators.first()?;
        let NodeKind::VariableDeclarator { id, init } = ast.kind(first) else {
            return None;
        };
        (ast.identifier_name(*id) == Some("styles")).then_some(*init)
    });

    match existing {
        Some(init) => {
            let call = init.filter(|&c| is_style_sheet_factory_call(ast, c, factories))?;
            let collection = factory_object_argument(ast, call)?;
            let NodeKind::ObjectExpression { properties } = ast.kind(collection) else {
                return None;
            };
            match properties.first() {
                Some(&first) => Some(TextEdit::insert(ast.span(first).end, format!(",\n  {entry}"))),
                None => Some(TextEdit::insert(ast.span(collection).start + 1, format!("\n  {entry},\n"))),
            }
        }
        None => {
            let factory = factories.first().map(String::as_str).unwrap_or("StyleSheet");
            let offset = body.last().map(|&s| ast.span(s).end).unwrap_or(ast.span(ast.root()).end);
            Some(TextEdit::insert(
                offset,
                format!("\n\nconst styles = {factory}.create({{\n  {entry},\n}});"),
            ))
        }
    }
}
