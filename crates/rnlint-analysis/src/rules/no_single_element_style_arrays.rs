//! no-single-element-style-arrays: `style={[x]}` allocates a new array on every render.

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{NodeId, NodeKind};
use crate::diagnostics::{Fix, TextEdit};
use crate::styles::matchers::{attribute_expression, is_style_attribute};

pub const NAME: &str = "no-single-element-style-arrays";

const MESSAGE: &str = "Single element style arrays are not necessary and cause unnecessary re-renders";

pub struct NoSingleElementStyleArrays;

impl Rule for NoSingleElementStyleArrays {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Report style arrays holding a single element",
            fixable: true,
            has_suggestions: false,
        }
    }

    fn create(&self, _config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        Ok(Box::new(SingleElementVisitor))
    }
}

struct SingleElementVisitor;

impl RuleVisitor for SingleElementVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        if !is_style_attribute(ast, node, ctx.style_settings().attribute_match) {
            return;
        }
        let Some(array) = attribute_expression(ast, node) else {
            return;
        };
        let NodeKind::ArrayExpression { elements } = ast.kind(array) else {
            return;
        };
        let [only] = elements.as_slice() else {
            return;
        };
        if matches!(ast.kind(*only), NodeKind::SpreadElement { .. }) {
            return;
        }
        let fix = Fix::new(
            "Use the element instead of the array",
            vec![TextEdit::replace(ast.span(array), ast.text(*only))],
        );
        ctx.report_with_fix(array, MESSAGE, fix);
    }
}
