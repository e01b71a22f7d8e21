//! Per-grammar parsers sharing one thread-local parse path.

use std::cell::RefCell;
use std::path::Path;

use tree_sitter::Parser;

use rnlint_core::errors::ParseError;
use rnlint_core::types::collections::FxHashMap;
use rnlint_core::types::span::LineIndex;

use super::error_tolerant;
use super::language::SourceLanguage;
use super::normalizer::Normalizer;
use crate::ast::Ast;

/// Contract every grammar-specific parser implements.
pub trait LanguageParser: Send + Sync {
    fn language(&self) -> SourceLanguage;

    fn extensions(&self) -> &[&str] {
        self.language().extensions()
    }

    fn parse(&self, source: &str, path: &Path) -> Result<Ast, ParseError> {
        parse_with_language(source, path, self.language())
    }
}

macro_rules! define_parser {
    ($name:ident, $language:expr) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl LanguageParser for $name {
            fn language(&self) -> SourceLanguage {
                $language
            }
        }
    };
}

define_parser!(JavaScriptParser, SourceLanguage::JavaScript);
define_parser!(TypeScriptParser, SourceLanguage::TypeScript);
define_parser!(TsxParser, SourceLanguage::Tsx);

thread_local! {
    static PARSERS: RefCell<FxHashMap<SourceLanguage, Parser>> = RefCell::new(FxHashMap::default());
}

/// Parse with this thread's cached parser for `language`, rejecting trees
/// with syntax errors, and normalize the result.
pub fn parse_with_language(source: &str, path: &Path, language: SourceLanguage) -> Result<Ast, ParseError> {
    let path_str = path.display().to_string();
    let tree = PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        if !parsers.contains_key(&language) {
            let mut parser = Parser::new();
            parser
                .set_language(&language.ts_language())
                .map_err(|e| ParseError::GrammarLoad {
                    language: language.name().to_string(),
                    message: e.to_string(),
                })?;
            parsers.insert(language, parser);
        }
        parsers
            .get_mut(&language)
            .and_then(|parser| parser.parse(source, None))
            .ok_or_else(|| ParseError::NoTree { path: path_str.clone() })
    })?;

    let root = tree.root_node();
    if let Some(error) = error_tolerant::first_error(root) {
        let location = LineIndex::new(source).location(source, error.start_byte() as u32);
        tracing::debug!(
            path = %path_str,
            errors = error_tolerant::count_errors(root),
            "rejecting tree with syntax errors"
        );
        return Err(ParseError::Syntax {
            path: path_str,
            kind: error_tolerant::error_kind(&error),
            line: location.line,
            column: location.column,
        });
    }

    Ok(Normalizer::new(source).normalize_tree(root, &path_str))
}
