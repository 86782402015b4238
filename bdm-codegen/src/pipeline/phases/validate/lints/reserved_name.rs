//! Lint for business object names that cannot be generated.

use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::{pipeline::Diagnostic, program::validate_qualified_name};

/// Lint that errors on missing packages and reserved built-in type names.
pub struct ReservedNameLint;

impl Lint for ReservedNameLint {
    fn name(&self) -> &'static str {
        "reserved-name"
    }

    fn description(&self) -> &'static str {
        "Reject unqualified names and names of built-in types"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            if let Err(err) = validate_qualified_name(&bo.qualified_name) {
                diagnostics.push(
                    Diagnostic::error(self.name(), err.to_string()).at(bo.qualified_name.as_str()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bdm_model::BusinessObject;

    use super::{super::model_of, *};

    #[test]
    fn test_valid_name() {
        let model = model_of([BusinessObject::new("org.bonitasoft.hr.Employee")]);

        let mut diagnostics = Vec::new();
        ReservedNameLint.check(&model, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reserved_names() {
        let model = model_of([
            BusinessObject::new("java.lang.String"),
            BusinessObject::new("org.acme.Date"),
            BusinessObject::new("Employee"),
        ]);

        let mut diagnostics = Vec::new();
        ReservedNameLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics[0].message.contains("reserved"));
        assert!(diagnostics[1].message.contains("built-in type"));
        assert!(diagnostics[2].message.contains("package"));
    }
}
