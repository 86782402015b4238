//! Lint for fields that would generate clashing members.

use std::collections::HashMap;

use bdm_core::capitalize;
use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    program::{PERSISTENCE_ID, PERSISTENCE_VERSION},
};

/// Lint that errors on fields sharing a name or accessor names.
///
/// `name` and `Name` both produce `getName`/`setName`, and fields named like
/// the generated identity or version fields clash with them.
pub struct DuplicateFieldLint;

impl Lint for DuplicateFieldLint {
    fn name(&self) -> &'static str {
        "duplicate-field"
    }

    fn description(&self) -> &'static str {
        "Detect fields with the same name or the same accessors"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            let mut seen: HashMap<String, &str> = HashMap::new();

            for field in &bo.fields {
                let location = format!("{}.fields.{}", bo.qualified_name, field.name);

                if let Some(generated) = [PERSISTENCE_ID, PERSISTENCE_VERSION]
                    .into_iter()
                    .find(|g| capitalize(g) == capitalize(&field.name))
                {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "field '{}' clashes with the generated '{}' field",
                                field.name, generated
                            ),
                        )
                        .at(location),
                    );
                    continue;
                }

                match seen.get(&capitalize(&field.name)) {
                    Some(first) if *first == field.name => diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("field '{}' is declared more than once", field.name),
                        )
                        .at(location),
                    ),
                    Some(first) => diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "fields '{}' and '{}' generate the same accessors",
                                first, field.name
                            ),
                        )
                        .at(location),
                    ),
                    None => {
                        seen.insert(capitalize(&field.name), &field.name);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bdm_core::FieldType;
    use bdm_model::{BusinessObject, Field};

    use super::{super::model_of, *};

    fn check(bo: BusinessObject) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        DuplicateFieldLint.check(&model_of([bo]), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_distinct_fields() {
        let diagnostics = check(
            BusinessObject::new("org.acme.Invoice")
                .field(Field::new("number", FieldType::String))
                .field(Field::new("total", FieldType::Double)),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_same_name() {
        let diagnostics = check(
            BusinessObject::new("org.acme.Invoice")
                .field(Field::new("total", FieldType::Double))
                .field(Field::new("total", FieldType::Long)),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("more than once"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("org.acme.Invoice.fields.total")
        );
    }

    #[test]
    fn test_same_accessors() {
        let diagnostics = check(
            BusinessObject::new("org.acme.Invoice")
                .field(Field::new("total", FieldType::Double))
                .field(Field::new("Total", FieldType::Double)),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("same accessors"));
    }

    #[test]
    fn test_generated_field_clash() {
        let diagnostics = check(
            BusinessObject::new("org.acme.Invoice")
                .field(Field::new("persistenceId", FieldType::Long))
                .field(Field::new("PersistenceVersion", FieldType::Long)),
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[1].message.contains("'persistenceVersion'"));
    }
}
