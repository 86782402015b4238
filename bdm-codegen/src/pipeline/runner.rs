//! Pipeline orchestrator.

use bdm_model::BusinessObjectModel;
use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{BuildPhase, ValidatePhase},
};
use crate::program::Variant;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, build) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let mut ctx = Pipeline::new().variant(Variant::Client).run(model)?;
/// let program = ctx.take_program()?;
/// ```
pub struct Pipeline {
    variant: Variant,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline building the server variant.
    pub fn new() -> Self {
        Self {
            variant: Variant::Server,
            phases: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a model.
    ///
    /// # Errors
    ///
    /// Returns an error if any lint reports an error or any phase fails.
    pub fn run(&self, model: BusinessObjectModel) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(model, self.variant);

        let builtin_phases: Vec<Box<dyn Phase>> =
            vec![Box::new(ValidatePhase::new()), Box::new(BuildPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run the lints only, keeping every diagnostic.
    pub fn check(&self, model: BusinessObjectModel) -> CompilationContext {
        let mut ctx = CompilationContext::new(model, self.variant);
        ValidatePhase::new().collect(&mut ctx);
        ctx
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(phase = phase.name(), "{}", phase.description());
        phase.run(ctx)?;
        tracing::debug!(
            phase = phase.name(),
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
