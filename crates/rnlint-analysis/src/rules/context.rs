//! Per-file, per-rule context handed to rule visitors.

use std::cell::RefCell;
use std::path::Path;

use rnlint_core::config::SharedSettings;
use rnlint_core::types::span::Span;

use crate::ast::{Ast, NodeId};
use crate::diagnostics::{Diagnostic, Fix, Severity};
use crate::imports::{ExportCache, ModuleResolver, ModuleSettings};
use crate::styles::{ConstantTable, StyleSettings};

/// Cross-file collaborators, shared by every file of a run.
#[derive(Clone, Copy)]
pub struct ImportServices<'a> {
    pub resolver: &'a dyn ModuleResolver,
    pub cache: &'a ExportCache,
    pub settings: &'a ModuleSettings,
}

/// Everything a rule may read while visiting one file, plus its diagnostic sink.
pub struct RuleContext<'a> {
    rule: &'static str,
    severity: Severity,
    ast: &'a Ast,
    constants: &'a ConstantTable,
    settings: &'a SharedSettings,
    style_settings: &'a StyleSettings,
    imports: ImportServices<'a>,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl<'a> RuleContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rule: &'static str,
        severity: Severity,
        ast: &'a Ast,
        constants: &'a ConstantTable,
        settings: &'a SharedSettings,
        style_settings: &'a StyleSettings,
        imports: ImportServices<'a>,
    ) -> Self {
        Self {
            rule,
            severity,
            ast,
            constants,
            settings,
            style_settings,
            imports,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn rule(&self) -> &'static str {
        self.rule
    }

    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn path(&self) -> &'a Path {
        Path::new(self.ast.path())
    }

    pub fn constants(&self) -> &'a ConstantTable {
        self.constants
    }

    pub fn settings(&self) -> &'a SharedSettings {
        self.settings
    }

    pub fn style_settings(&self) -> &'a StyleSettings {
        self.style_settings
    }

    pub fn imports(&self) -> ImportServices<'a> {
        self.imports
    }

    pub fn report(&self, node: NodeId, message: impl Into<String>) {
        self.report_span(self.ast.span(node), message, None, Vec::new());
    }

    pub fn report_with_fix(&self, node: NodeId, message: impl Into<String>, fix: Fix) {
        self.report_span(self.ast.span(node), message, Some(fix), Vec::new());
    }

    pub fn report_span(&self, span: Span, message: impl Into<String>, fix: Option<Fix>, suggestions: Vec<Fix>) {
        let diagnostic = Diagnostic {
            rule: self.rule.to_string(),
            severity: self.severity,
            message: message.into(),
            span,
            start: self.ast.location(span.start),
            end: self.ast.location(span.end),
            fix,
            suggestions,
        };
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
