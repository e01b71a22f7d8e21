//! Error handling for rnlint.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod fix_error;
pub mod lint_error;
pub mod parse_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use error_code::RnlintErrorCode;
pub use fix_error::FixError;
pub use lint_error::LintError;
pub use parse_error::ParseError;
pub use resolve_error::ResolveError;
