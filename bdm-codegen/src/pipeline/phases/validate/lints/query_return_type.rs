//! Lint for query return types.

use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about queries returning neither the owning business
/// object nor a list.
///
/// Such queries are still generated with a single-entity result.
pub struct QueryReturnTypeLint;

impl Lint for QueryReturnTypeLint {
    fn name(&self) -> &'static str {
        "query-return-type"
    }

    fn description(&self) -> &'static str {
        "Check queries return their business object or a list of it"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            for query in &bo.queries {
                let return_type = query.return_type.trim();
                if query.returns_sequence()
                    || return_type == bo.qualified_name
                    || return_type == bo.simple_name()
                {
                    continue;
                }

                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "query '{}' returns '{}', generating a single '{}' result instead",
                            query.name,
                            return_type,
                            bo.simple_name()
                        ),
                    )
                    .at(format!("{}.queries.{}", bo.qualified_name, query.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bdm_model::{BusinessObject, Query};

    use super::{super::model_of, *};

    fn check(return_type: &str) -> Vec<Diagnostic> {
        let model = model_of([BusinessObject::new("org.acme.Invoice").query(Query::new(
            "q",
            "SELECT i FROM Invoice i",
            return_type,
        ))]);
        let mut diagnostics = Vec::new();
        QueryReturnTypeLint.check(&model, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_expected_return_types() {
        for ty in [
            "org.acme.Invoice",
            "Invoice",
            "java.util.List",
            "java.util.List<org.acme.Invoice>",
            "Collection",
        ] {
            assert!(check(ty).is_empty(), "{ty}");
        }
    }

    #[test]
    fn test_unexpected_return_type() {
        let diagnostics = check("java.lang.Long");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("java.lang.Long"));
    }
}
