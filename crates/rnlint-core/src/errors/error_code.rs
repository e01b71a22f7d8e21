//! Stable error codes, one per subsystem.

pub const PARSE_ERROR: &str = "RNLINT_PARSE";
pub const CONFIG_ERROR: &str = "RNLINT_CONFIG";
pub const RESOLVE_ERROR: &str = "RNLINT_RESOLVE";
pub const FIX_ERROR: &str = "RNLINT_FIX";
pub const MALFORMED_TREE: &str = "RNLINT_MALFORMED_TREE";
pub const IO_ERROR: &str = "RNLINT_IO";

/// Maps an error to its stable, machine-readable code.
pub trait RnlintErrorCode {
    fn error_code(&self) -> &'static str;
}
