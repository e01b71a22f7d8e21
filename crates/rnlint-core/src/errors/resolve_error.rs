//! Cross-file resolution errors.

use super::error_code::{self, RnlintErrorCode};

/// Errors from the cross-file import resolver.
///
/// These never abort linting of the importing file: the resolver turns them into
/// "no contribution" entries or diagnostics on the import statement.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to stat {path}: {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RnlintErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        error_code::RESOLVE_ERROR
    }
}
