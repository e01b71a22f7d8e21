//! no-color-literals: color values written as literals instead of variables.

use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{NodeId, NodeKind};
use crate::styles::matchers::{
    attribute_expression, color_literal_properties, factory_object_argument, is_style_attribute,
    is_style_sheet_factory_call, object_properties, property_value, style_object_expressions,
};
use crate::styles::InspectedObject;

pub const NAME: &str = "no-color-literals";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Style objects with fewer properties than this are not checked.
    pub allow_style_properties_less_than: Option<usize>,
}

pub struct NoColorLiterals;

impl Rule for NoColorLiterals {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Report literal color values in style objects",
            fixable: false,
            has_suggestions: false,
        }
    }

    fn create(&self, config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        Ok(Box::new(ColorLiteralsVisitor { options }))
    }
}

struct ColorLiteralsVisitor {
    options: Options,
}

impl ColorLiteralsVisitor {
    fn check_object(&self, ctx: &RuleContext<'_>, object: NodeId) {
        let ast = ctx.ast();
        if let Some(threshold) = self.options.allow_style_properties_less_than {
            if object_properties(ast, object).len() < threshold {
                return;
            }
        }
        let colors = color_literal_properties(ast, object, ctx.constants());
        if colors.is_empty() {
            return;
        }
        let inspected = InspectedObject::from_properties(ast, &colors, ctx.constants());
        ctx.report(object, format!("Color literal: {inspected}"));
    }
}

impl RuleVisitor for ColorLiteralsVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        let style = ctx.style_settings();
        match ast.kind(node) {
            NodeKind::CallExpression { .. } if is_style_sheet_factory_call(ast, node, &style.factory_names) => {
                let Some(collection) = factory_object_argument(ast, node) else {
                    return;
                };
                for declaration in object_properties(ast, collection) {
                    let Some(value) = property_value(ast, declaration) else {
                        continue;
                    };
                    if matches!(ast.kind(value), NodeKind::ObjectExpression { .. }) {
                        self.check_object(ctx, value);
                    }
                }
            }
            NodeKind::JsxAttribute { .. } if is_style_attribute(ast, node, style.attribute_match) => {
                let Some(value) = attribute_expression(ast, node) else {
                    return;
                };
                for object in style_object_expressions(ast, value) {
                    self.check_object(ctx, object);
                }
            }
            _ => {}
        }
    }
}
