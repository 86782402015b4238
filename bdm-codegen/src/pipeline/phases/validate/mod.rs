//! Validate phase - runs lints on the model.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DaoMethodLint, DuplicateFieldLint, IdentifierLint, QueryReturnTypeLint, ReservedNameLint,
    TypeCollisionLint, UniqueConstraintLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the model using configurable lints.
///
/// Every lint runs before the phase fails, so all problems are reported
/// together.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(ReservedNameLint),
                Box::new(TypeCollisionLint),
                Box::new(IdentifierLint),
                Box::new(DuplicateFieldLint),
                Box::new(UniqueConstraintLint),
                Box::new(DaoMethodLint),
                Box::new(QueryReturnTypeLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint, recording diagnostics without failing.
    pub fn collect(&self, ctx: &mut CompilationContext) {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.model, &mut ctx.diagnostics);
            tracing::trace!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "ran lint"
            );
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check model integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.collect(ctx);

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            let details: Vec<String> = ctx.errors().map(|d| format!("  {d}")).collect();
            bail!(
                "Validation failed with {} error(s)\n{}",
                ctx.error_count(),
                details.join("\n")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bdm_model::{BusinessObject, BusinessObjectModel, Query};

    use super::*;
    use crate::{pipeline::Diagnostic, program::Variant};

    fn context(business_objects: impl IntoIterator<Item = BusinessObject>) -> CompilationContext {
        let mut model = BusinessObjectModel::new();
        for bo in business_objects {
            model.add_business_object(bo).unwrap();
        }
        CompilationContext::new(model, Variant::Server)
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            [
                "reserved-name",
                "type-collision",
                "identifier",
                "duplicate-field",
                "unique-constraint",
                "dao-method",
                "query-return-type",
            ]
        );
        assert!(ValidatePhase::empty().lint_info().is_empty());
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let mut ctx = context(Vec::<BusinessObject>::new());
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context([BusinessObject::new("org.acme.Invoice").query(Query::new(
            "countAll",
            "SELECT COUNT(i) FROM Invoice i",
            "java.lang.Long",
        ))]);

        let result = ValidatePhase::new().run(&mut ctx);

        // Warnings don't cause failure
        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut ctx = context([
            BusinessObject::new("org.acme.String"),
            BusinessObject::new("Invoice"),
        ]);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_err());
        assert_eq!(ctx.error_count(), 2);
    }
}
