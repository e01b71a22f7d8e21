//! Findings returned to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use rnlint_core::config::RuleLevel;
use rnlint_core::types::span::{Location, Span};

/// Severity of a finding, derived from the rule's configured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// `None` for rules that are off.
    pub fn from_level(level: RuleLevel) -> Option<Self> {
        match level {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Self::Warning),
            RuleLevel::Error => Some(Self::Error),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Replace `span` with `replacement`. An empty span is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self { span, replacement: replacement.into() }
    }

    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self { span: Span::empty(offset), replacement: text.into() }
    }
}

/// A set of non-overlapping edits applied together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub description: String,
    pub edits: Vec<TextEdit>,
}

impl Fix {
    pub fn new(description: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self { description: description.into(), edits }
    }
}

/// One lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub start: Location,
    pub end: Location,
    /// Applied by `--fix`-style hosts without asking.
    pub fix: Option<Fix>,
    /// Offered to the user, never applied automatically.
    pub suggestions: Vec<Fix>,
}

impl Diagnostic {
    /// Ordering key: position first, then rule and message for stable output.
    pub fn sort_key(&self) -> (Location, &str, &str) {
        (self.start, self.rule.as_str(), self.message.as_str())
    }
}
