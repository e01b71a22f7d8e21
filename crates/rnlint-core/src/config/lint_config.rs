//! Top-level rnlint configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RuleConfig, RuleLevel, SharedSettings};
use crate::errors::ConfigError;

/// Project configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "rnlint.toml";

const ENV_STYLE_SHEET_OBJECT_NAMES: &str = "RNLINT_STYLE_SHEET_OBJECT_NAMES";
const ENV_ENABLE_IMPORTS_CHECK: &str = "RNLINT_ENABLE_IMPORTS_CHECK";
const ENV_RAW_TEXT_SKIP: &str = "RNLINT_RAW_TEXT_SKIP";

/// Shared settings plus one table per rule.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RNLINT_*`)
/// 3. Project config (`rnlint.toml` in the project root)
/// 4. Compiled defaults (every rule off)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    pub settings: SharedSettings,
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Overrides supplied by the host, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub style_sheet_object_names: Option<Vec<String>>,
    pub enable_imports_check: Option<bool>,
    pub rule_levels: Vec<(String, RuleLevel)>,
}

impl LintConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: LintConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Enable every named rule at `error`, with default options.
    pub fn all<'a>(rule_names: impl IntoIterator<Item = &'a str>) -> Self {
        let rules = rule_names
            .into_iter()
            .map(|name| (name.to_string(), RuleConfig::with_level(RuleLevel::Error)))
            .collect();
        Self { settings: SharedSettings::default(), rules }
    }

    /// Builder-style helper to enable one rule.
    pub fn with_rule(mut self, name: &str, rule: RuleConfig) -> Self {
        self.rules.insert(name.to_string(), rule);
        self
    }

    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    pub fn rule_level(&self, name: &str) -> RuleLevel {
        self.rules.get(name).map(|r| r.level).unwrap_or_default()
    }

    /// Names of the rules whose level is not `off`.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|(_, r)| r.level.is_enabled())
            .map(|(name, _)| name.as_str())
    }

    pub fn validate(config: &LintConfig) -> Result<(), ConfigError> {
        if let Some(names) = &config.settings.style_sheet_object_names {
            if names.is_empty() || names.iter().any(|n| n.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: "settings.style-sheet-object-names".to_string(),
                    message: "must list at least one non-empty name".to_string(),
                });
            }
        }
        if let Some(patterns) = &config.settings.import_ignore {
            for pattern in patterns {
                if let Err(e) = regex::Regex::new(pattern) {
                    return Err(ConfigError::ValidationFailed {
                        field: "settings.import-ignore".to_string(),
                        message: format!("invalid pattern '{pattern}': {e}"),
                    });
                }
            }
        }
        if let Some(extensions) = &config.settings.import_extensions {
            if let Some(bad) = extensions.iter().find(|e| !e.starts_with('.')) {
                return Err(ConfigError::ValidationFailed {
                    field: "settings.import-extensions".to_string(),
                    message: format!("extension '{bad}' must start with '.'"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut LintConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: LintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.merge(&file_config);
        Ok(())
    }

    /// Merge `other` into `self`; set values in `other` win.
    pub fn merge(&mut self, other: &LintConfig) {
        self.settings.merge_from(&other.settings);
        for (name, rule) in &other.rules {
            self.rules
                .entry(name.clone())
                .and_modify(|existing| existing.merge_from(rule))
                .or_insert_with(|| rule.clone());
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut LintConfig) {
        if let Ok(val) = std::env::var(ENV_STYLE_SHEET_OBJECT_NAMES) {
            let names = split_list(&val);
            if !names.is_empty() {
                config.settings.style_sheet_object_names = Some(names);
            }
        }
        if let Ok(val) = std::env::var(ENV_ENABLE_IMPORTS_CHECK) {
            if let Ok(v) = val.parse::<bool>() {
                config
                    .rules
                    .entry("no-unused-styles".to_string())
                    .or_default()
                    .set_option("enableImportsCheck", v);
            }
        }
        if let Ok(val) = std::env::var(ENV_RAW_TEXT_SKIP) {
            let skip: Vec<toml::Value> = split_list(&val).into_iter().map(toml::Value::from).collect();
            if !skip.is_empty() {
                config
                    .rules
                    .entry("no-raw-text".to_string())
                    .or_default()
                    .set_option("skip", toml::Value::Array(skip));
            }
        }
    }

    /// Apply host overrides (highest priority).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(names) = &overrides.style_sheet_object_names {
            self.settings.style_sheet_object_names = Some(names.clone());
        }
        if let Some(v) = overrides.enable_imports_check {
            self.rules
                .entry("no-unused-styles".to_string())
                .or_default()
                .set_option("enableImportsCheck", v);
        }
        for (name, level) in &overrides.rule_levels {
            self.rules.entry(name.clone()).or_default().level = *level;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
