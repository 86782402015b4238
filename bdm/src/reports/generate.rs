//! Generate command report data structures.

use std::path::PathBuf;

use bdm_codegen::Variant;
use bdm_codegen_java::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub variant: Variant,
    /// Number of business objects in the model.
    pub business_objects: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl GenerateReport {
    pub fn file_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written { files, .. } => files.len(),
            GenerationResult::Preview(files) => files.len(),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                out.key_value(
                    "Generated",
                    &format!(
                        "{} {} file(s) for {} business object(s)",
                        self.file_count(),
                        self.variant,
                        self.business_objects
                    ),
                );
                out.newline();
                out.section(&output_dir.display().to_string());
                for file in files {
                    let relative = file.strip_prefix(output_dir).unwrap_or(file);
                    out.added_item(&relative.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }

                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            variant: Variant::Server,
            business_objects: 1,
            warnings: vec!["warning[query-return-type]: odd".to_string()],
            result: GenerationResult::Written {
                output_dir: PathBuf::from("out"),
                files: vec![
                    PathBuf::from("out/org/acme/Invoice.java"),
                    PathBuf::from("out/org/acme/InvoiceDAO.java"),
                ],
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "warning: warning[query-return-type]: odd",
                "Generated: 2 server file(s) for 1 business object(s)",
                "",
                "out:",
                "  + org/acme/Invoice.java",
                "  + org/acme/InvoiceDAO.java",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            variant: Variant::Client,
            business_objects: 1,
            warnings: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "org/acme/Invoice.java".to_string(),
                content: "package org.acme;".to_string(),
            }]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "── org/acme/Invoice.java ──",
                "package org.acme;",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
