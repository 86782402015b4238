use std::path::Path;

use bdm_codegen::{
    Program, Variant,
    builder::ClassRenderer,
    generation::{FileEntry, FileRegistry},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::Pipeline,
};
use bdm_model::BusinessObjectModel;
use eyre::Result;

use crate::class_renderer::JavaClassRenderer;

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    pub variant: Variant,
}

/// Java code generator producing one source file per entity and DAO.
pub struct Generator {
    program: Program,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.registry()
            .preview()
            .into_iter()
            .map(|entry| PreviewFile {
                path: entry.path,
                content: entry.content,
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let written = self.registry().write_all(output_dir)?;
        tracing::info!(
            count = written.len(),
            dir = %output_dir.display(),
            "generated java sources"
        );
        Ok(GenerateResult { written })
    }
}

impl Generator {
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Validate and build `model`, then wrap the resulting program.
    ///
    /// Lint warnings are logged; any lint error fails the run before a
    /// single file is rendered.
    pub fn from_model(model: BusinessObjectModel, options: GeneratorOptions) -> Result<Self> {
        let mut ctx = Pipeline::new().variant(options.variant).run(model)?;
        for warning in ctx.warnings() {
            tracing::warn!("{warning}");
        }
        Ok(Self::new(ctx.take_program()?))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Render every class of the program into an in-memory registry.
    pub fn registry(&self) -> FileRegistry {
        let mut renderer = JavaClassRenderer::new();
        let mut registry = FileRegistry::new();
        registry.register_all(self.program.classes().map(|class| {
            FileEntry::for_class(
                &class.qualified_name,
                self.file_extension(),
                renderer.render_class(class),
            )
        }));
        registry
    }
}
