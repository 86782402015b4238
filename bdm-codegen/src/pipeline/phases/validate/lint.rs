//! Lint trait for model validation.

use bdm_model::BusinessObjectModel;

use crate::pipeline::Diagnostic;

/// A lint that checks the model for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Information about a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}
