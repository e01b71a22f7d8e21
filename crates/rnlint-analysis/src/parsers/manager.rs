//! ParserManager: picks a parser by file extension.

use std::path::Path;

use rnlint_core::errors::ParseError;

use super::language::SourceLanguage;
use super::languages::{JavaScriptParser, LanguageParser, TsxParser, TypeScriptParser};
use crate::ast::Ast;

pub struct ParserManager {
    parsers: Vec<Box<dyn LanguageParser>>,
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserManager {
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(JavaScriptParser),
                Box::new(TypeScriptParser),
                Box::new(TsxParser),
            ],
        }
    }

    pub fn parser_for(&self, language: SourceLanguage) -> Option<&dyn LanguageParser> {
        self.parsers
            .iter()
            .find(|p| p.language() == language)
            .map(|p| p.as_ref())
    }

    pub fn supports(&self, path: &Path) -> bool {
        SourceLanguage::from_path(path)
            .and_then(|language| self.parser_for(language))
            .is_some()
    }

    pub fn parse(&self, source: &str, path: &Path) -> Result<Ast, ParseError> {
        let parser = SourceLanguage::from_path(path)
            .and_then(|language| self.parser_for(language))
            .ok_or_else(|| ParseError::UnsupportedLanguage { path: path.display().to_string() })?;
        parser.parse(source, path)
    }
}

/// Parse one file with the default parser set.
pub fn parse_source(source: &str, path: &Path) -> Result<Ast, ParseError> {
    ParserManager::new().parse(source, path)
}
