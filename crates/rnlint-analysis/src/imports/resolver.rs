//! Module specifier → file path resolution.

use std::path::{Path, PathBuf};

/// Host-provided module resolution. Returning `None` means "not followed".
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, specifier: &str, importer: &Path) -> Option<PathBuf>;
}

/// Resolves `./` and `../` specifiers against the importing file's directory.
///
/// Tries the path as written, then with each extension appended, then
/// `index.<ext>` inside it. Bare package specifiers are never resolved.
#[derive(Debug, Clone)]
pub struct RelativeModuleResolver {
    extensions: Vec<String>,
}

impl RelativeModuleResolver {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let mut out = Vec::with_capacity(self.extensions.len() * 2 + 1);
        out.push(base.to_path_buf());
        for ext in &self.extensions {
            let mut with_ext = base.as_os_str().to_os_string();
            with_ext.push(ext);
            out.push(PathBuf::from(with_ext));
        }
        for ext in &self.extensions {
            out.push(base.join(format!("index{ext}")));
        }
        out
    }
}

impl Default for RelativeModuleResolver {
    fn default() -> Self {
        Self::new(
            rnlint_core::config::settings::DEFAULT_IMPORT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        )
    }
}

impl ModuleResolver for RelativeModuleResolver {
    fn resolve(&self, specifier: &str, importer: &Path) -> Option<PathBuf> {
        if !(specifier.starts_with("./") || specifier.starts_with("../")) {
            return None;
        }
        let base = importer.parent().unwrap_or_else(|| Path::new("")).join(specifier);
        self.candidates(&base).into_iter().find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_extensions_and_index_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("styles.js"), "").unwrap();
        fs::create_dir(dir.path().join("theme")).unwrap();
        fs::write(dir.path().join("theme").join("index.ts"), "").unwrap();
        let importer = dir.path().join("App.js");
        let resolver = RelativeModuleResolver::default();

        assert_eq!(resolver.resolve("./styles", &importer), Some(dir.path().join("styles.js")));
        assert_eq!(
            resolver.resolve("./theme", &importer),
            Some(dir.path().join("theme").join("index.ts"))
        );
        assert_eq!(resolver.resolve("./missing", &importer), None);
        assert_eq!(resolver.resolve("react-native", &importer), None);
    }
}
