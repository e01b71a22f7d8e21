//! Settings shared by every rule.

use serde::{Deserialize, Serialize};

/// Default factory object names recognized in `<Name>.create({...})`.
pub const DEFAULT_STYLE_SHEET_OBJECT_NAMES: &[&str] = &["StyleSheet"];

/// Module whose platform-suffixed components must live in platform files.
pub const DEFAULT_PLATFORM_MODULE: &str = "react-native";

/// Extensions the cross-file resolver will follow.
pub const DEFAULT_IMPORT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Path patterns (regular expressions) the cross-file resolver never follows.
pub const DEFAULT_IMPORT_IGNORE: &[&str] = &["node_modules"];

/// How attribute names are matched to decide whether they carry styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleAttributeMatch {
    /// Only an attribute named exactly `style`.
    Exact,
    /// Any attribute whose name contains `style`, case-insensitively (`containerStyle`).
    #[default]
    Contains,
}

impl StyleAttributeMatch {
    pub fn matches(&self, attribute_name: &str) -> bool {
        match self {
            Self::Exact => attribute_name == "style",
            Self::Contains => attribute_name.to_ascii_lowercase().contains("style"),
        }
    }
}

/// The `[settings]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct SharedSettings {
    /// Recognized style factory names. Default: `["StyleSheet"]`.
    pub style_sheet_object_names: Option<Vec<String>>,
    /// Platform UI library module name. Default: `react-native`.
    pub platform_module: Option<String>,
    /// Extensions followed by the cross-file resolver.
    pub import_extensions: Option<Vec<String>>,
    /// Regular expressions of paths the cross-file resolver ignores.
    pub import_ignore: Option<Vec<String>>,
    /// Attribute-name heuristic for style-bearing attributes. Default: `contains`.
    pub style_attribute_match: Option<StyleAttributeMatch>,
}

impl SharedSettings {
    pub fn effective_style_sheet_object_names(&self) -> Vec<String> {
        self.style_sheet_object_names
            .clone()
            .unwrap_or_else(|| to_owned_vec(DEFAULT_STYLE_SHEET_OBJECT_NAMES))
    }

    pub fn effective_platform_module(&self) -> &str {
        self.platform_module.as_deref().unwrap_or(DEFAULT_PLATFORM_MODULE)
    }

    pub fn effective_import_extensions(&self) -> Vec<String> {
        self.import_extensions
            .clone()
            .unwrap_or_else(|| to_owned_vec(DEFAULT_IMPORT_EXTENSIONS))
    }

    pub fn effective_import_ignore(&self) -> Vec<String> {
        self.import_ignore
            .clone()
            .unwrap_or_else(|| to_owned_vec(DEFAULT_IMPORT_IGNORE))
    }

    pub fn effective_style_attribute_match(&self) -> StyleAttributeMatch {
        self.style_attribute_match.unwrap_or_default()
    }

    /// Fields of `other` that are set replace the ones in `self`.
    pub fn merge_from(&mut self, other: &SharedSettings) {
        if other.style_sheet_object_names.is_some() {
            self.style_sheet_object_names = other.style_sheet_object_names.clone();
        }
        if other.platform_module.is_some() {
            self.platform_module = other.platform_module.clone();
        }
        if other.import_extensions.is_some() {
            self.import_extensions = other.import_extensions.clone();
        }
        if other.import_ignore.is_some() {
            self.import_ignore = other.import_ignore.clone();
        }
        if other.style_attribute_match.is_some() {
            self.style_attribute_match = other.style_attribute_match;
        }
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_match_is_case_insensitive() {
        let m = StyleAttributeMatch::Contains;
        assert!(m.matches("style"));
        assert!(m.matches("containerStyle"));
        assert!(m.matches("STYLE"));
        assert!(!m.matches("className"));
    }

    #[test]
    fn exact_match_only_accepts_style() {
        let m = StyleAttributeMatch::Exact;
        assert!(m.matches("style"));
        assert!(!m.matches("textStyle"));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let s = SharedSettings::default();
        assert_eq!(s.effective_style_sheet_object_names(), vec!["StyleSheet".to_string()]);
        assert_eq!(s.effective_platform_module(), "react-native");
        assert_eq!(s.effective_import_ignore(), vec!["node_modules".to_string()]);
    }
}
