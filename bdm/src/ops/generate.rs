//! Generate operation - Java sources from a model.

use std::path::Path;

use bdm_codegen::{Variant, pipeline::Pipeline};
use bdm_codegen_java::{Generator, LanguageCodegen};
use bdm_model::BusinessObjectModel;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory receiving the package directories.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub variant: Variant,
}

/// Execute the generate operation.
///
/// Validation errors abort before anything is rendered, so a failed run
/// never leaves partial output behind.
pub fn generate(model: BusinessObjectModel, opts: GenerateOptions) -> Result<GenerateReport> {
    let business_objects = model.len();

    let mut ctx = Pipeline::new()
        .variant(opts.variant)
        .run(model)
        .wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let generator = Generator::new(ctx.take_program()?);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written,
        }
    };

    Ok(GenerateReport {
        variant: opts.variant,
        business_objects,
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    const MODEL: &str = r#"
        [[business_objects]]
        qualified_name = "org.acme.Invoice"

        [[business_objects.fields]]
        name = "number"
        type = "STRING"
    "#;

    fn model(src: &str) -> BusinessObjectModel {
        BusinessObjectModel::from_str(src).unwrap()
    }

    #[test]
    fn test_generate_writes_sources() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            model(MODEL),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                variant: Variant::Server,
            },
        )
        .unwrap();

        assert_eq!(report.business_objects, 1);
        assert_eq!(report.file_count(), 2);
        assert!(dir.path().join("org/acme/Invoice.java").is_file());
        assert!(dir.path().join("org/acme/InvoiceDAO.java").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            model(MODEL),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
                variant: Variant::Client,
            },
        )
        .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref files) if files.len() == 2));
        assert!(!dir.path().join("org").exists());
    }

    #[test]
    fn test_invalid_model_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let src = r#"
            [[business_objects]]
            qualified_name = "org.acme.Invoice"

            [[business_objects]]
            qualified_name = "org.acme.List"
        "#;

        let result = generate(
            model(src),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                variant: Variant::Server,
            },
        );

        assert!(result.is_err());
        assert!(!dir.path().join("org").exists());
    }
}
