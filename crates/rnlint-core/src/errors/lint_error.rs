//! Top-level lint errors.

use super::error_code::{self, RnlintErrorCode};
use super::{ConfigError, ParseError};

/// Errors that stop the analysis of a file.
///
/// Lint findings are never errors; these cover inputs the engine cannot walk.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed syntax tree: {kind} node at {line}:{column}: {message}")]
    MalformedTree {
        kind: String,
        line: u32,
        column: u32,
        message: String,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RnlintErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::MalformedTree { .. } => error_code::MALFORMED_TREE,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
