//! rnlint-analysis: style lint rules for React Native components
//!
//! This crate provides:
//! - Parsers: tree-sitter JavaScript/TypeScript/TSX normalized into an arena AST
//! - Styles: factory matchers, the per-file style registry, reference resolution
//! - Imports: cross-file style collections behind a shared export cache
//! - Rules: the seven lint rules as single-pass visitors
//! - Engine: the `Linter`, sequential per file and parallel across files
//! - Diagnostics and reporters: findings, fixes, console and JSON output

pub mod ast;
pub mod diagnostics;
pub mod engine;
pub mod imports;
pub mod parsers;
pub mod reporters;
pub mod rules;
pub mod styles;

// Re-exports for convenience
pub use ast::{Ast, AstBuilder, Node, NodeId, NodeKind};
pub use diagnostics::{apply_edits, Diagnostic, Fix, Severity, TextEdit};
pub use engine::{FileReport, Linter};
pub use imports::{ExportCache, ModuleResolver, RelativeModuleResolver};
pub use parsers::parse_source;
pub use reporters::{available_formats, create_reporter, Reporter};
pub use rules::{Rule, RuleMeta, RuleRegistry, RuleVisitor};
