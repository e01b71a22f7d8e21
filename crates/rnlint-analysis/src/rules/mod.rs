//! Lint rules: each rule implements `Rule` and is registered in the `RuleRegistry`.
//!
//! A rule turns its configuration into a fresh `RuleVisitor` per file. The
//! engine walks the file once and calls every visitor in document order.

pub mod context;
pub mod registry;

pub mod no_color_literals;
pub mod no_inline_styles;
pub mod no_raw_text;
pub mod no_single_element_style_arrays;
pub mod no_unused_styles;
pub mod sort_styles;
pub mod split_platform_components;

use serde::de::DeserializeOwned;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use crate::ast::NodeId;

pub use context::{ImportServices, RuleContext};
pub use registry::RuleRegistry;

/// Static facts about a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Produces auto-fixes.
    pub fixable: bool,
    /// Produces opt-in suggestions.
    pub has_suggestions: bool,
}

/// Trait that every rule must implement.
pub trait Rule: Send + Sync {
    fn meta(&self) -> RuleMeta;

    fn name(&self) -> &'static str {
        self.meta().name
    }

    /// Build a visitor for one file. Invalid options are a `ConfigError`.
    fn create(&self, config: &RuleConfig, settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError>;
}

/// Callbacks for one traversal of one file.
pub trait RuleVisitor {
    /// Pre-order, before the node's children.
    fn enter(&mut self, _ctx: &RuleContext<'_>, _node: NodeId) {}

    /// Post-order, after the node's children.
    fn leave(&mut self, _ctx: &RuleContext<'_>, _node: NodeId) {}

    /// After the whole file has been visited.
    fn finish(&mut self, _ctx: &RuleContext<'_>) {}
}

/// Deserialize a rule's options table into its typed options.
pub(crate) fn options<T: DeserializeOwned>(config: &RuleConfig, rule: &str) -> Result<T, ConfigError> {
    config.options_as(rule)
}
