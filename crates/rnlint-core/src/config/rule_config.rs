//! Per-rule configuration tables.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Reporting level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    #[default]
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Some(Self::Off),
            "warn" | "warning" | "1" => Some(Self::Warn),
            "error" | "2" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A `[rules.<name>]` table: a `level` plus the rule's own options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleConfig {
    #[serde(default)]
    pub level: RuleLevel,
    /// Remaining keys, deserialized by the rule into its typed options.
    #[serde(flatten)]
    pub options: toml::Table,
}

impl RuleConfig {
    pub fn with_level(level: RuleLevel) -> Self {
        Self { level, options: toml::Table::new() }
    }

    /// Set one option, replacing any previous value.
    pub fn set_option(&mut self, key: &str, value: impl Into<toml::Value>) {
        self.options.insert(key.to_string(), value.into());
    }

    /// Deserialize the options into the rule's typed options struct.
    pub fn options_as<T: DeserializeOwned>(&self, rule: &str) -> Result<T, ConfigError> {
        toml::Value::Table(self.options.clone())
            .try_into()
            .map_err(|e| ConfigError::ValidationFailed {
                field: format!("rules.{rule}"),
                message: e.to_string(),
            })
    }

    /// `other` wins for its level and for every option key it sets.
    pub fn merge_from(&mut self, other: &RuleConfig) {
        self.level = other.level;
        for (key, value) in &other.options {
            self.options.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default, PartialEq)]
    #[serde(default, rename_all = "camelCase")]
    struct Opts {
        enable_imports_check: bool,
    }

    #[test]
    fn options_deserialize_camel_case() {
        let cfg: RuleConfig = toml::from_str("level = \"error\"\nenableImportsCheck = true").unwrap();
        assert_eq!(cfg.level, RuleLevel::Error);
        let opts: Opts = cfg.options_as("no-unused-styles").unwrap();
        assert!(opts.enable_imports_check);
    }

    #[test]
    fn level_parses_numeric_aliases() {
        assert_eq!(RuleLevel::parse_str("2"), Some(RuleLevel::Error));
        assert_eq!(RuleLevel::parse_str("warning"), Some(RuleLevel::Warn));
        assert_eq!(RuleLevel::parse_str("loud"), None);
    }
}
