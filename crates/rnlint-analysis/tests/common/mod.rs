//! Shared helpers for rule tests.
#![allow(dead_code)]

use rnlint_analysis::{Diagnostic, Linter};
use rnlint_core::config::{LintConfig, RuleConfig, RuleLevel};

pub fn rule_config(options: &[(&str, toml::Value)]) -> RuleConfig {
    let mut rule = RuleConfig::with_level(RuleLevel::Error);
    for (key, value) in options {
        rule.set_option(key, value.clone());
    }
    rule
}

pub fn lint_with(rule: &str, config: RuleConfig, path: &str, source: &str) -> Vec<Diagnostic> {
    let lint_config = LintConfig::default().with_rule(rule, config);
    Linter::new(lint_config)
        .expect("valid config")
        .lint_source(path, source)
        .expect("source parses")
}

pub fn lint(rule: &str, source: &str) -> Vec<Diagnostic> {
    lint_with(rule, rule_config(&[]), "Component.js", source)
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.message.clone()).collect()
}

pub fn lines(parts: &[&str]) -> String {
    parts.join("\n")
}
