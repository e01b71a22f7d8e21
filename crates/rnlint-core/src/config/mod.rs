//! Configuration system for rnlint.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod lint_config;
pub mod rule_config;
pub mod settings;

pub use lint_config::{ConfigOverrides, LintConfig, CONFIG_FILE_NAME};
pub use rule_config::{RuleConfig, RuleLevel};
pub use settings::{SharedSettings, StyleAttributeMatch};
