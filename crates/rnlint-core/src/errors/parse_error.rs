//! Parse errors.

use super::error_code::{self, RnlintErrorCode};

/// Errors raised while turning source text into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported file extension for {path}")]
    UnsupportedLanguage { path: String },

    #[error("grammar could not be loaded for {language}: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("parser produced no tree for {path}")]
    NoTree { path: String },

    #[error("syntax error in {path} at {line}:{column}: {kind} node")]
    Syntax {
        path: String,
        /// Offending node kind, `ERROR` or `MISSING <kind>`.
        kind: String,
        line: u32,
        column: u32,
    },
}

impl ParseError {
    /// Line and column of the failure, when it points into the source.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl RnlintErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
