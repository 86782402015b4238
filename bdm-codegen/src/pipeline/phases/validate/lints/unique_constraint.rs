//! Lint for unique constraint declarations.

use std::collections::HashSet;

use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on empty, duplicate or dangling unique constraints.
pub struct UniqueConstraintLint;

impl Lint for UniqueConstraintLint {
    fn name(&self) -> &'static str {
        "unique-constraint"
    }

    fn description(&self) -> &'static str {
        "Check unique constraints reference declared fields"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            let mut names = HashSet::new();

            for uc in &bo.unique_constraints {
                let location = format!("{}.unique_constraints.{}", bo.qualified_name, uc.name);

                if !names.insert(uc.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("unique constraint '{}' is declared more than once", uc.name),
                        )
                        .at(location.as_str()),
                    );
                }

                if uc.fields.is_empty() {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("unique constraint '{}' has no fields", uc.name),
                        )
                        .at(location.as_str()),
                    );
                }

                for field in uc.fields.iter().filter(|f| bo.get_field(f).is_none()) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "unique constraint '{}' references unknown field '{}'",
                                uc.name, field
                            ),
                        )
                        .at(location.as_str()),
                    );
                }
            }
        }
    }
}
