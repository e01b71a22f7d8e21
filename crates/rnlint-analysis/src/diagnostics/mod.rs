//! Diagnostics, fixes and edit application.

pub mod fix;
pub mod types;

pub use fix::apply_edits;
pub use types::{Diagnostic, Fix, Severity, TextEdit};
