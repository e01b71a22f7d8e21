//! rnlint-core: shared types, errors, configuration and tracing for the
//! rnlint style analysis engine.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::LintConfig;
pub use types::span::{Location, Span};
