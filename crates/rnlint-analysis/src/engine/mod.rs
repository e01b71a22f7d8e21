//! Lint engine: a single document-order traversal per file with every
//! enabled rule attached as a visitor; files run in parallel under rayon.

pub mod linter;

pub use linter::{FileReport, Linter};
