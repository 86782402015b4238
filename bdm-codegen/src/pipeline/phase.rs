//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the model and collects diagnostics
/// - `BuildPhase` - builds the entity and DAO classes into a program
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
