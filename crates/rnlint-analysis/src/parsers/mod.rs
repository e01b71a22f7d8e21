//! Tree-sitter parser subsystem: JavaScript, TypeScript and TSX with
//! thread_local parser instances, normalized into the rnlint `Ast`.

pub mod error_tolerant;
pub mod language;
pub mod languages;
pub mod manager;
pub mod normalizer;
pub mod text;

pub use language::SourceLanguage;
pub use languages::LanguageParser;
pub use manager::{parse_source, ParserManager};
