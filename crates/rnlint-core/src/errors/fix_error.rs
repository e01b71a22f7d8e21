//! Fix application errors.

use super::error_code::{self, RnlintErrorCode};

/// Errors raised while applying a set of text edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    #[error("edits overlap at {first_start}..{first_end} and {second_start}..{second_end}")]
    Overlap {
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    },

    #[error("edit {start}..{end} is outside the source (length {len})")]
    OutOfBounds { start: u32, end: u32, len: usize },

    #[error("edit {start}..{end} does not fall on a character boundary")]
    NotCharBoundary { start: u32, end: u32 },
}

impl RnlintErrorCode for FixError {
    fn error_code(&self) -> &'static str {
        error_code::FIX_ERROR
    }
}
