//! Compilation context passed through pipeline phases.

use bdm_model::BusinessObjectModel;
use eyre::{Result, eyre};

use super::diagnostic::Diagnostic;
use crate::program::{Program, Variant};

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The model being compiled.
    pub model: BusinessObjectModel,
    /// Which class flavor the build phase produces.
    pub variant: Variant,
    /// The generated program (populated by BuildPhase).
    pub program: Option<Program>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(model: BusinessObjectModel, variant: Variant) -> Self {
        Self {
            model,
            variant,
            program: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the program out of the context.
    ///
    /// # Errors
    ///
    /// Fails if the build phase has not run.
    pub fn take_program(&mut self) -> Result<Program> {
        self.program
            .take()
            .ok_or_else(|| eyre!("program not built, did the build phase run?"))
    }
}
