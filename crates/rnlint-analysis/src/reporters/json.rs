//! JSON reporter: structured JSON output.

use serde_json::json;

use super::Reporter;
use crate::engine::FileReport;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, reports: &[FileReport]) -> Result<String, String> {
        let files: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                json!({
                    "path": r.path,
                    "diagnostic_count": r.diagnostics.len(),
                    "diagnostics": r.diagnostics,
                })
            })
            .collect();

        let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        let output = json!({
            "file_count": reports.len(),
            "total_diagnostics": total,
            "files": files,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
