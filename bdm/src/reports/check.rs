//! Check command report data structures.

use std::path::PathBuf;

use bdm_codegen::pipeline::Diagnostic;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the model file.
    pub model_path: PathBuf,
    /// Qualified names of the checked business objects.
    pub business_objects: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(&diagnostic.to_string());
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.model_path.display(),
                self.error_count()
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        out.newline();
        out.section(&format!("Business objects ({})", self.business_objects.len()));
        for name in &self.business_objects {
            out.list_item(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            model_path: PathBuf::from("bom.toml"),
            business_objects: vec!["org.acme.Invoice".to_string()],
            diagnostics,
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = RecordingOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "✓ bom.toml is valid",
                "",
                "Business objects (1):",
                "  - org.acme.Invoice",
            ]
        );
    }

    #[test]
    fn test_render_errors() {
        let mut out = RecordingOutput::default();
        report(vec![
            Diagnostic::error("reserved-name", "bad name").at("org.acme.Invoice"),
        ])
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "error[reserved-name]: bad name (at org.acme.Invoice)",
                "",
                "✗ bom.toml has 1 error(s)",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report(vec![Diagnostic::warning(
            "query-return-type",
            "odd return type",
        )]))
        .unwrap();

        assert_eq!(json["model_path"], "bom.toml");
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
        assert!(json["diagnostics"][0].get("location").is_none());
    }
}
