//! Process-lifetime cache of imported modules' style maps.
//!
//! Uses `moka::sync::Cache` keyed by xxh3 of the absolute path plus every
//! setting that changes what a module contributes. Built maps are re-checked
//! against the file's mtime; "no contribution" verdicts stick until invalidated.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use moka::sync::Cache;
use xxhash_rust::xxh3::xxh3_64;

use rnlint_core::config::SharedSettings;
use rnlint_core::errors::{ConfigError, ResolveError};

use super::filters::{is_unambiguous_module, ImportFilter};
use super::styles_map::StylesMap;

/// Maximum cached modules.
const MAX_ENTRIES: u64 = 10_000;

/// A cached verdict for one module.
#[derive(Debug, Clone)]
pub enum CacheEntry {
    /// Wrong extension, ignored path, or not an ES module.
    NoContribution,
    Styles(Arc<StylesMap>),
}

/// Settings that affect a module's contribution.
#[derive(Debug, Clone)]
pub struct ModuleSettings {
    pub factory_names: Vec<String>,
    pub filter: ImportFilter,
}

impl ModuleSettings {
    pub fn from_settings(settings: &SharedSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            factory_names: settings.effective_style_sheet_object_names(),
            filter: ImportFilter::from_settings(settings)?,
        })
    }

    fn fingerprint(&self) -> String {
        let mut out = String::new();
        for name in &self.factory_names {
            out.push_str(name);
            out.push('\u{1}');
        }
        out.push('\u{2}');
        for ext in self.filter.extensions() {
            out.push_str(ext);
            out.push('\u{1}');
        }
        out.push('\u{2}');
        for pattern in self.filter.ignore_patterns() {
            out.push_str(pattern);
            out.push('\u{1}');
        }
        out
    }
}

/// Shared, thread-safe export cache. Owned by the host and handed to the
/// linter; concurrent inserts of the same key are harmless.
pub struct ExportCache {
    cache: Cache<u64, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for ExportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(MAX_ENTRIES).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn cache_key(path: &Path, settings: &ModuleSettings) -> u64 {
        let mut material = path.to_string_lossy().into_owned();
        material.push('\0');
        material.push_str(&settings.fingerprint());
        xxh3_64(material.as_bytes())
    }

    /// Style map of the module at `path`, or `None` when it contributes nothing
    /// or cannot be read.
    pub fn styles_for(&self, path: &Path, settings: &ModuleSettings) -> Option<Arc<StylesMap>> {
        match self.lookup(path, settings) {
            Ok(found) => found,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "imported module unavailable");
                None
            }
        }
    }

    fn lookup(&self, path: &Path, settings: &ModuleSettings) -> Result<Option<Arc<StylesMap>>, ResolveError> {
        let key = Self::cache_key(path, settings);
        let cached = self.cache.get(&key);
        if let Some(CacheEntry::NoContribution) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(None);
        }

        let mtime = modified(path)?;
        if let Some(CacheEntry::Styles(map)) = &cached {
            if map.mtime == Some(mtime) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(path = %path.display(), "export cache hit");
                return Ok(Some(Arc::clone(map)));
            }
            tracing::debug!(path = %path.display(), "export cache entry is stale; re-parsing");
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(path = %path.display(), "export cache miss");

        if !settings.filter.has_valid_extension(path) || settings.filter.is_ignored(path) {
            self.cache.insert(key, CacheEntry::NoContribution);
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ResolveError::Read {
            path: path.display().to_string(),
            source,
        })?;
        if !is_unambiguous_module(&content) {
            self.cache.insert(key, CacheEntry::NoContribution);
            return Ok(None);
        }

        let mut map = StylesMap::parse(path, &content, &settings.factory_names);
        map.mtime = Some(mtime);
        let map = Arc::new(map);
        self.cache.insert(key, CacheEntry::Styles(Arc::clone(&map)));
        Ok(Some(map))
    }

    /// Drop the entry for `path` under `settings`.
    pub fn invalidate(&self, path: &Path, settings: &ModuleSettings) {
        tracing::debug!(path = %path.display(), "export cache invalidate");
        self.cache.invalidate(&Self::cache_key(path, settings));
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

fn modified(path: &Path) -> Result<SystemTime, ResolveError> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| ResolveError::Stat { path: path.display().to_string(), source })
}
