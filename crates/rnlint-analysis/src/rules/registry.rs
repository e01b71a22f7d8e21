//! Rule registry: lookup by name.

use super::no_color_literals::NoColorLiterals;
use super::no_inline_styles::NoInlineStyles;
use super::no_raw_text::NoRawText;
use super::no_single_element_style_arrays::NoSingleElementStyleArrays;
use super::no_unused_styles::NoUnusedStyles;
use super::sort_styles::SortStyles;
use super::split_platform_components::SplitPlatformComponents;
use super::Rule;

/// Registry holding every known rule.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry with every built-in rule.
    pub fn with_all_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NoUnusedStyles));
        registry.register(Box::new(NoInlineStyles));
        registry.register(Box::new(NoColorLiterals));
        registry.register(Box::new(SortStyles));
        registry.register(Box::new(NoRawText));
        registry.register(Box::new(SplitPlatformComponents));
        registry.register(Box::new(NoSingleElementStyleArrays));
        registry
    }

    /// Register a rule; a rule with the same name is replaced.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        match self.rules.iter().position(|r| r.name() == rule.name()) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.name() == name).map(|r| r.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_all_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_are_registered_once() {
        let registry = RuleRegistry::with_all_rules();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "no-unused-styles",
                "no-inline-styles",
                "no-color-literals",
                "sort-styles",
                "no-raw-text",
                "split-platform-components",
                "no-single-element-style-arrays",
            ]
        );
        assert!(registry.get("sort-styles").is_some_and(|r| r.meta().fixable));
        assert!(registry.get("no-such-rule").is_none());
    }
}
