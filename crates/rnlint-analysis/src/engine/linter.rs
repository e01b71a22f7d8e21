//! The linter: one traversal per file, every enabled rule as a visitor.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use rnlint_core::config::{LintConfig, RuleConfig};
use rnlint_core::errors::{ConfigError, LintError};

use crate::ast::{walk, Ast, WalkEvent};
use crate::diagnostics::{Diagnostic, Severity};
use crate::imports::{ExportCache, ModuleResolver, ModuleSettings, RelativeModuleResolver};
use crate::parsers::parse_source;
use crate::rules::{ImportServices, RuleContext, RuleRegistry, RuleVisitor};
use crate::styles::{ConstantTable, StyleSettings};

/// Findings for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lints files against a fixed configuration.
///
/// Construction validates the configuration once: unknown rule names and
/// invalid rule options are reported here, not per file. A `Linter` is
/// `Sync`; files may be linted from several threads at once.
pub struct Linter {
    config: LintConfig,
    registry: RuleRegistry,
    cache: Arc<ExportCache>,
    resolver: Arc<dyn ModuleResolver>,
    style_settings: StyleSettings,
    module_settings: ModuleSettings,
}

impl Linter {
    pub fn new(config: LintConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, RuleRegistry::with_all_rules())
    }

    pub fn with_registry(config: LintConfig, registry: RuleRegistry) -> Result<Self, ConfigError> {
        for name in config.enabled_rules() {
            let rule = registry
                .get(name)
                .ok_or_else(|| ConfigError::UnknownRule { name: name.to_string() })?;
            let rule_config = config.rule(name).cloned().unwrap_or_default();
            rule.create(&rule_config, &config.settings)?;
        }
        let style_settings = StyleSettings::from_settings(&config.settings);
        let module_settings = ModuleSettings::from_settings(&config.settings)?;
        let resolver = RelativeModuleResolver::new(config.settings.effective_import_extensions());
        Ok(Self {
            config,
            registry,
            cache: Arc::new(ExportCache::new()),
            resolver: Arc::new(resolver),
            style_settings,
            module_settings,
        })
    }

    /// Share an export cache across linters (for example across watch-mode runs).
    pub fn with_export_cache(mut self, cache: Arc<ExportCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn ModuleResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn export_cache(&self) -> &Arc<ExportCache> {
        &self.cache
    }

    /// Parse `source` as the file at `path` and lint it.
    pub fn lint_source(&self, path: impl AsRef<Path>, source: &str) -> Result<Vec<Diagnostic>, LintError> {
        let ast = parse_source(source, path.as_ref())?;
        self.lint_ast(&ast)
    }

    pub fn lint_file(&self, path: &Path) -> Result<Vec<Diagnostic>, LintError> {
        let source = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.lint_source(path, &source)
    }

    /// Lint files in parallel. Results keep the input order; one failing file
    /// does not stop the others.
    pub fn lint_files(&self, paths: &[PathBuf]) -> Vec<Result<FileReport, LintError>> {
        let start = Instant::now();
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| {
                self.lint_file(path).map(|diagnostics| FileReport {
                    path: path.display().to_string(),
                    diagnostics,
                })
            })
            .collect();
        tracing::debug!(
            files = paths.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "lint run finished"
        );
        results
    }

    /// Lint an already built tree. The tree is validated first.
    pub fn lint_ast(&self, ast: &Ast) -> Result<Vec<Diagnostic>, LintError> {
        ast.validate()?;
        let constants = ConstantTable::build(ast);
        let services = ImportServices {
            resolver: self.resolver.as_ref(),
            cache: self.cache.as_ref(),
            settings: &self.module_settings,
        };

        let mut active: Vec<(RuleContext<'_>, Box<dyn RuleVisitor>)> = Vec::new();
        for name in self.config.enabled_rules() {
            let Some(rule) = self.registry.get(name) else {
                continue;
            };
            let level = self.config.rule_level(name);
            let Some(severity) = Severity::from_level(level) else {
                continue;
            };
            let rule_config = self.config.rule(name).cloned().unwrap_or_else(|| RuleConfig::with_level(level));
            let visitor = rule.create(&rule_config, &self.config.settings)?;
            let ctx = RuleContext::new(
                rule.name(),
                severity,
                ast,
                &constants,
                &self.config.settings,
                &self.style_settings,
                services,
            );
            active.push((ctx, visitor));
        }
        if active.is_empty() {
            return Ok(Vec::new());
        }

        walk(ast, |event| match event {
            WalkEvent::Enter(node) => {
                for (ctx, visitor) in active.iter_mut() {
                    visitor.enter(ctx, node);
                }
            }
            WalkEvent::Leave(node) => {
                for (ctx, visitor) in active.iter_mut() {
                    visitor.leave(ctx, node);
                }
            }
        });

        let mut diagnostics = Vec::new();
        for (ctx, mut visitor) in active {
            visitor.finish(&ctx);
            tracing::trace!(rule = ctx.rule(), path = ast.path(), count = ctx.diagnostic_count(), "rule finished");
            diagnostics.extend(ctx.into_diagnostics());
        }
        diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Ok(diagnostics)
    }

    /// Names of the rules this linter runs.
    pub fn active_rules(&self) -> Vec<&'static str> {
        self.config
            .enabled_rules()
            .filter_map(|name| self.registry.get(name).map(|rule| rule.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnlint_core::config::RuleLevel;

    #[test]
    fn unknown_rules_are_rejected() {
        let config = LintConfig::default().with_rule("no-such-rule", RuleConfig::with_level(RuleLevel::Warn));
        assert!(matches!(Linter::new(config), Err(ConfigError::UnknownRule { .. })));
    }

    #[test]
    fn disabled_rules_do_not_run() {
        let config = LintConfig::default().with_rule("no-raw-text", RuleConfig::with_level(RuleLevel::Off));
        let linter = Linter::new(config).unwrap();
        assert!(linter.active_rules().is_empty());
        assert!(linter.lint_source("a.js", "<View>hello</View>;").unwrap().is_empty());
    }

    #[test]
    fn severity_follows_the_rule_level() {
        let config = LintConfig::default().with_rule("no-raw-text", RuleConfig::with_level(RuleLevel::Warn));
        let diagnostics = Linter::new(config).unwrap().lint_source("a.js", "<View>hello</View>;").unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].rule, "no-raw-text");
    }

    #[test]
    fn syntax_errors_are_not_findings() {
        let linter = Linter::new(LintConfig::all(["no-raw-text"])).unwrap();
        assert!(matches!(linter.lint_source("a.js", "const = ;"), Err(LintError::Parse(_))));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let linter = Linter::new(LintConfig::all(["no-raw-text"])).unwrap();
        let results = linter.lint_files(&[PathBuf::from("/definitely/not/here.js")]);
        assert!(matches!(results[0], Err(LintError::Io { .. })));
    }
}
