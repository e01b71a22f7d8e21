//! Cross-file import resolution for style collections.

pub mod cache;
pub mod filters;
pub mod resolver;
pub mod styles_map;

use std::path::Path;
use std::sync::Arc;

pub use cache::{CacheEntry, ExportCache, ModuleSettings};
pub use filters::{is_unambiguous_module, ImportFilter};
pub use resolver::{ModuleResolver, RelativeModuleResolver};
pub use styles_map::{ModuleError, StylesMap};

/// Resolves `specifier` from `importer` and returns the target module's styles.
///
/// `None` when the specifier does not resolve, or the module is filtered out,
/// unreadable, or not an ES module.
pub fn resolve_imported_styles(
    specifier: &str,
    importer: &Path,
    resolver: &dyn ModuleResolver,
    cache: &ExportCache,
    settings: &ModuleSettings,
) -> Option<Arc<StylesMap>> {
    let path = resolver.resolve(specifier, importer)?;
    cache.styles_for(&path, settings)
}
