//! Checks that decide whether a resolved file is worth parsing.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use rnlint_core::config::SharedSettings;
use rnlint_core::errors::ConfigError;

fn unambiguous_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?m)(^|;)\s*(export|import)((\s+\w)|(\s*[{*=]))|import\(").ok())
        .as_ref()
}

/// Cheap test for ES module syntax: an `import`/`export` statement or a
/// dynamic `import(`. Files without it are treated as scripts.
pub fn is_unambiguous_module(content: &str) -> bool {
    unambiguous_pattern().is_some_and(|re| re.is_match(content))
}

/// Extension allow-list and ignore patterns for followed imports.
#[derive(Debug, Clone)]
pub struct ImportFilter {
    extensions: Vec<String>,
    ignore: Vec<Regex>,
}

impl ImportFilter {
    pub fn new(extensions: Vec<String>, ignore_patterns: &[String]) -> Result<Self, ConfigError> {
        let ignore = ignore_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::ValidationFailed {
                    field: "settings.import-ignore".to_string(),
                    message: format!("invalid pattern '{pattern}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { extensions, ignore })
    }

    pub fn from_settings(settings: &SharedSettings) -> Result<Self, ConfigError> {
        Self::new(settings.effective_import_extensions(), &settings.effective_import_ignore())
    }

    pub fn has_valid_extension(&self, path: &Path) -> bool {
        let name = path.to_string_lossy();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let name = path.to_string_lossy();
        self.ignore.iter().any(|re| re.is_match(&name))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn ignore_patterns(&self) -> impl Iterator<Item = &str> {
        self.ignore.iter().map(Regex::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_module_syntax() {
        assert!(is_unambiguous_module("import React from 'react';"));
        assert!(is_unambiguous_module("const a = 1;\nexport default a;"));
        assert!(is_unambiguous_module("export { a as b }"));
        assert!(is_unambiguous_module("const m = import('./m');"));
        assert!(!is_unambiguous_module("module.exports = { a: 1 };"));
        assert!(!is_unambiguous_module("const important = require('x');"));
    }

    #[test]
    fn filters_by_extension_and_ignore() {
        let filter = ImportFilter::new(vec![".js".into()], &["node_modules".to_string()]).unwrap();
        assert!(filter.has_valid_extension(Path::new("a/styles.js")));
        assert!(!filter.has_valid_extension(Path::new("a/styles.json")));
        assert!(filter.is_ignored(Path::new("/p/node_modules/x/index.js")));
        assert!(!filter.is_ignored(Path::new("/p/src/index.js")));
    }

    #[test]
    fn bad_ignore_pattern_is_a_config_error() {
        assert!(matches!(
            ImportFilter::new(vec![], &["(".to_string()]),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }
}
