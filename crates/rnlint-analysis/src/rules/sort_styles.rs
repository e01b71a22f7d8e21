//! sort-styles: keys of style collections and style objects in a fixed order.
//!
//! Keys are compared within chunks: a spread or a key that cannot be resolved
//! statically ends the current chunk and starts a new one.

use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;
use rnlint_core::types::span::Span;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::diagnostics::{Fix, TextEdit};
use crate::styles::matchers::{factory_object_argument, is_style_sheet_factory_call, property_key_name};
use crate::styles::shorthand::{first_violation, sorted_order};
use crate::styles::{ConstantTable, SortOrder};

pub const NAME: &str = "sort-styles";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub order: SortOrder,
    pub ignore_class_names: bool,
    pub ignore_style_properties: bool,
}

pub struct SortStyles;

impl Rule for SortStyles {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Require style collection keys and style properties to be sorted",
            fixable: true,
            has_suggestions: false,
        }
    }

    fn create(&self, config: &RuleConfig, _settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        Ok(Box::new(SortStylesVisitor { options }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkKind {
    ClassNames,
    StyleProperties,
}

impl ChunkKind {
    fn label(self) -> &'static str {
        match self {
            Self::ClassNames => "class names",
            Self::StyleProperties => "style properties",
        }
    }

    fn shorthand_aware(self) -> bool {
        self == Self::StyleProperties
    }
}

/// A run of `Property` entries with statically known keys.
struct Chunk {
    items: Vec<NodeId>,
    names: Vec<String>,
}

struct SortStylesVisitor {
    options: Options,
}

impl RuleVisitor for SortStylesVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        if !is_style_sheet_factory_call(ast, node, &ctx.style_settings().factory_names) {
            return;
        }
        let Some(collection) = factory_object_argument(ast, node) else {
            return;
        };

        let chunks = chunks_of(ast, collection, ctx.constants());
        if !self.options.ignore_class_names {
            for chunk in &chunks {
                self.check(ctx, collection, chunk, ChunkKind::ClassNames);
            }
        }
        if self.options.ignore_style_properties {
            return;
        }
        for declaration in chunks.iter().flat_map(|c| c.items.iter()) {
            let NodeKind::Property { value, .. } = ast.kind(*declaration) else {
                continue;
            };
            let NodeKind::ObjectExpression { properties } = ast.kind(*value) else {
                continue;
            };
            if properties.len() < 2 {
                continue;
            }
            for chunk in &chunks_of(ast, *value, ctx.constants()) {
                self.check(ctx, *value, chunk, ChunkKind::StyleProperties);
            }
        }
    }
}

impl SortStylesVisitor {
    fn check(&self, ctx: &RuleContext<'_>, object: NodeId, chunk: &Chunk, kind: ChunkKind) {
        let order = self.options.order;
        let Some(index) = first_violation(&chunk.names, order, kind.shorthand_aware()) else {
            return;
        };
        let ast = ctx.ast();
        let message = format!(
            "Expected {} to be in {}ending order. '{}' should be before '{}'.",
            kind.label(),
            order.as_str(),
            chunk.names[index],
            chunk.names[index - 1],
        );
        let key_span = match ast.kind(chunk.items[index]) {
            NodeKind::Property { key, .. } => ast.span(*key),
            _ => ast.span(chunk.items[index]),
        };
        let fix = sort_fix(ast, object, chunk, order, kind);
        ctx.report_span(key_span, message, Some(fix), Vec::new());
    }
}

fn chunks_of(ast: &Ast, object: NodeId, constants: &ConstantTable) -> Vec<Chunk> {
    let NodeKind::ObjectExpression { properties } = ast.kind(object) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut current = Chunk { items: Vec::new(), names: Vec::new() };
    for &entry in properties {
        let name = match ast.kind(entry) {
            NodeKind::Property { .. } => property_key_name(ast, entry, constants),
            _ => None,
        };
        match name {
            Some(name) => {
                current.items.push(entry);
                current.names.push(name);
            }
            None if !current.items.is_empty() => {
                out.push(std::mem::replace(&mut current, Chunk { items: Vec::new(), names: Vec::new() }));
            }
            None => {}
        }
    }
    if !current.items.is_empty() {
        out.push(current);
    }
    out
}

/// Rewrite every misplaced entry of the chunk with the text of the entry that
/// belongs there. Leading comments travel with their entry.
fn sort_fix(ast: &Ast, object: NodeId, chunk: &Chunk, order: SortOrder, kind: ChunkKind) -> Fix {
    let permutation = sorted_order(&chunk.names, order, kind.shorthand_aware());
    let edits = permutation
        .iter()
        .enumerate()
        .filter(|(position, &original)| *position != original)
        .map(|(position, &original)| {
            let target = actual_range(ast, object, chunk.items[position]);
            let moved = actual_range(ast, object, chunk.items[original]);
            TextEdit::replace(target, moved.text(ast.source()))
        })
        .collect();
    Fix::new(format!("Sort {}", kind.label()), edits)
}

/// The entry's span extended back over the comments between it and the
/// previous entry (or the opening brace).
fn actual_range(ast: &Ast, object: NodeId, entry: NodeId) -> Span {
    let span = ast.span(entry);
    let floor = previous_sibling_end(ast, object, entry).unwrap_or(ast.span(object).start + 1);
    let start = ast
        .comments_between(floor, span.start)
        .map(|c| c.span.start)
        .min()
        .unwrap_or(span.start);
    Span::new(start, span.end)
}

fn previous_sibling_end(ast: &Ast, object: NodeId, entry: NodeId) -> Option<u32> {
    let NodeKind::ObjectExpression { properties } = ast.kind(object) else {
        return None;
    };
    let index = properties.iter().position(|&p| p == entry)?;
    index.checked_sub(1).map(|i| ast.span(properties[i]).end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::apply_edits;
    use crate::engine::Linter;
    use rnlint_core::config::{LintConfig, RuleLevel};

    fn lint_with(source: &str, rule: RuleConfig) -> Vec<crate::diagnostics::Diagnostic> {
        let config = LintConfig::default().with_rule(NAME, rule);
        Linter::new(config).unwrap().lint_source("styles.js", source).unwrap()
    }

    fn lint(source: &str) -> Vec<crate::diagnostics::Diagnostic> {
        lint_with(source, RuleConfig::with_level(RuleLevel::Error))
    }

    #[test]
    fn reports_the_first_out_of_order_class_name() {
        let diagnostics = lint("const styles = StyleSheet.create({ b: {}, a: {}, c: {} });");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Expected class names to be in ascending order. 'a' should be before 'b'."
        );
    }

    #[test]
    fn spreads_split_chunks() {
        assert!(lint("const styles = StyleSheet.create({ b: {}, ...base, a: {} });").is_empty());
    }

    #[test]
    fn shorthand_and_longhand_are_not_compared() {
        let source = "const styles = StyleSheet.create({ a: { marginLeft: 1, margin: 2 } });";
        assert!(lint(source).is_empty());
    }

    #[test]
    fn fix_moves_leading_comments_with_entries() {
        let source = "const styles = StyleSheet.create({\n  // second\n  b: {},\n  // first\n  a: {},\n});";
        let diagnostics = lint(source);
        let fix = diagnostics[0].fix.as_ref().unwrap();
        let fixed = apply_edits(source, &fix.edits).unwrap();
        assert_eq!(fixed, "const styles = StyleSheet.create({\n  // first\n  a: {},\n  // second\n  b: {},\n});");
        assert!(lint(&fixed).is_empty());
    }

    #[test]
    fn desc_order_and_ignore_flags() {
        let mut rule = RuleConfig::with_level(RuleLevel::Error);
        rule.set_option("order", "desc");
        rule.set_option("ignoreStyleProperties", true);
        let source = "const styles = StyleSheet.create({ b: { x: 1, y: 2 }, a: {} });";
        assert!(lint_with(source, rule).is_empty());
    }

    #[test]
    fn unknown_order_is_a_config_error() {
        let mut rule = RuleConfig::with_level(RuleLevel::Error);
        rule.set_option("order", "sideways");
        let config = LintConfig::default().with_rule(NAME, rule);
        assert!(Linter::new(config).is_err());
    }
}
