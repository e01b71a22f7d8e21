//! no-raw-text: text rendered outside of a text component.

use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::styles::matchers::{element_name, enclosing_element};

pub const NAME: &str = "no-raw-text";

/// Elements that may contain raw text.
pub const TEXT_ELEMENTS: &[&str] = &["Text", "TSpan", "StyledText", "Animated.Text"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Extra element names allowed to contain raw text.
    pub skip: Vec<String>,
}

pub struct NoRawText;

impl Rule for NoRawText {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Report raw text outside of text components",
            fixable: false,
            has_suggestions: false,
        }
    }

    fn create(&self, config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        let allowed = TEXT_ELEMENTS
            .iter()
            .map(|s| s.to_string())
            .chain(options.skip)
            .collect();
        Ok(Box::new(RawTextVisitor { allowed }))
    }
}

struct RawTextVisitor {
    allowed: Vec<String>,
}

impl RuleVisitor for RawTextVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        let value = match ast.kind(node) {
            NodeKind::StringLiteral { value } if is_text_position(ast, node, true) => value.trim().to_string(),
            NodeKind::JsxText { value } => value.trim().to_string(),
            NodeKind::TemplateLiteral { quasis, expressions } if is_text_position(ast, node, false) => {
                let shown = match expressions.first() {
                    Some(&first) => ast.identifier_name(first).unwrap_or(ast.text(first)).to_string(),
                    None => quasis.concat(),
                };
                format!("TemplateLiteral: {shown}")
            }
            _ => return,
        };
        if let NodeKind::StringLiteral { value: raw } | NodeKind::JsxText { value: raw } = ast.kind(node) {
            if has_only_line_breaks(raw) {
                return;
            }
        }
        if self.inside_allowed_element(ast, node) {
            return;
        }

        let message = if value.is_empty() {
            "Whitespace(s) cannot be used outside of a <Text> tag".to_string()
        } else {
            format!("Raw text ({value}) cannot be used outside of a <Text> tag")
        };
        ctx.report(node, message);
    }
}

impl RawTextVisitor {
    fn inside_allowed_element(&self, ast: &Ast, node: NodeId) -> bool {
        enclosing_element(ast, node)
            .and_then(|element| element_name(ast, element))
            .is_some_and(|name| self.allowed.iter().any(|a| *a == name))
    }
}

/// A child of an element, or the whole expression of a child `{...}` container.
/// String literals may also sit directly under an element.
fn is_text_position(ast: &Ast, node: NodeId, allow_direct_child: bool) -> bool {
    let Some(parent) = ast.parent(node) else {
        return false;
    };
    match ast.kind(parent) {
        NodeKind::JsxExpressionContainer { .. } => !ast
            .parent(parent)
            .is_some_and(|grand| matches!(ast.kind(grand), NodeKind::JsxAttribute { .. })),
        NodeKind::JsxElement { .. } => allow_direct_child,
        _ => false,
    }
}

/// Line breaks, tabs and form feeds only, ignoring spaces. Spaces alone do not count.
fn has_only_line_breaks(value: &str) -> bool {
    let compact: String = value.chars().filter(|&c| c != ' ').collect();
    !compact.is_empty() && compact.chars().all(|c| matches!(c, '\r' | '\n' | '\t' | '\x0C' | '\x0B'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_breaks_are_exempt_but_spaces_are_not() {
        assert!(has_only_line_breaks("\n   \n"));
        assert!(has_only_line_breaks("\t"));
        assert!(!has_only_line_breaks("   "));
        assert!(!has_only_line_breaks("a\n"));
    }
}
