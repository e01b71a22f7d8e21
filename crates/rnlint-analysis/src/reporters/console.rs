//! Console reporter: human-readable output with color codes.

use super::Reporter;
use crate::diagnostics::Severity;
use crate::engine::FileReport;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, reports: &[FileReport]) -> Result<String, String> {
        let mut output = String::new();
        let mut errors = 0usize;
        let mut warnings = 0usize;

        for report in reports.iter().filter(|r| !r.diagnostics.is_empty()) {
            output.push_str(&report.path);
            output.push('\n');
            for diagnostic in &report.diagnostics {
                match diagnostic.severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                }
                output.push_str(&format!(
                    "  {}:{}  {}{}{}  {}  {}\n",
                    diagnostic.start.line,
                    diagnostic.start.column,
                    self.color_start(diagnostic.severity),
                    diagnostic.severity,
                    self.color_end(),
                    diagnostic.message,
                    diagnostic.rule,
                ));
                if let Some(ref fix) = diagnostic.fix {
                    output.push_str(&format!("    fix: {}\n", fix.description));
                }
                for suggestion in &diagnostic.suggestions {
                    output.push_str(&format!("    suggestion: {}\n", suggestion.description));
                }
            }
            output.push('\n');
        }

        let total = errors + warnings;
        if total == 0 {
            output.push_str("No problems found\n");
        } else {
            output.push_str(&format!(
                "{total} problem{} ({errors} error{}, {warnings} warning{})\n",
                plural(total),
                plural(errors),
                plural(warnings),
            ));
        }
        Ok(output)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
