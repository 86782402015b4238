//! Lint for generated types that would share a source file.

use std::collections::HashMap;

use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::{pipeline::Diagnostic, program::DaoBuilder};

/// Lint that errors when two generated types map to the same file.
///
/// Names are compared case-insensitively, so `org.acme.Invoice` and
/// `org.acme.invoice` collide, as do the entity `org.acme.InvoiceDAO` and
/// the DAO generated for `org.acme.Invoice`.
pub struct TypeCollisionLint;

impl Lint for TypeCollisionLint {
    fn name(&self) -> &'static str {
        "type-collision"
    }

    fn description(&self) -> &'static str {
        "Detect generated types whose names differ only by case"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, String> = HashMap::new();

        for bo in model.business_objects() {
            for generated in [bo.qualified_name.clone(), DaoBuilder::dao_name(bo)] {
                let normalized = generated.to_lowercase();
                if let Some(first) = seen.get(&normalized) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("generated type '{}' collides with '{}'", generated, first),
                        )
                        .at(bo.qualified_name.as_str()),
                    );
                } else {
                    seen.insert(normalized, generated);
                }
            }
        }
    }
}
