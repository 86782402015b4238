//! Lint for member names that are not usable Java identifiers.

use bdm_model::{BusinessObjectModel, validate_identifier};

use super::super::Lint;
use crate::{
    pipeline::Diagnostic,
    program::{getter_name, setter_name},
};

/// Methods inherited from `java.lang.Object` that an accessor cannot redeclare.
pub const OBJECT_METHODS: &[&str] = &[
    "clone",
    "finalize",
    "getClass",
    "hashCode",
    "notify",
    "notifyAll",
    "toString",
    "wait",
];

/// Lint that errors on field, query and parameter names that are keywords or
/// invalid identifiers, and on fields whose accessors clash with `Object`.
///
/// Models parsed from `bom.toml` are checked while parsing; models built in
/// code only pass through here.
pub struct IdentifierLint;

impl IdentifierLint {
    /// Returns false after reporting an unusable name.
    fn check_name(
        &self,
        name: &str,
        kind: &str,
        location: String,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> bool {
        let Some(reason) = validate_identifier(name) else {
            return true;
        };
        diagnostics.push(
            Diagnostic::error(
                self.name(),
                format!("{} '{}' is not a valid Java identifier: {}", kind, name, reason),
            )
            .at(location),
        );
        false
    }
}

impl Lint for IdentifierLint {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn description(&self) -> &'static str {
        "Reject keywords, invalid identifiers and accessors clashing with Object"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            for field in &bo.fields {
                let location = format!("{}.fields.{}", bo.qualified_name, field.name);
                if !self.check_name(&field.name, "field", location.clone(), diagnostics) {
                    continue;
                }

                let accessors = [
                    getter_name(&field.name, field.field_type),
                    setter_name(&field.name),
                ];
                if let Some(accessor) = accessors
                    .iter()
                    .find(|a| OBJECT_METHODS.contains(&a.as_str()))
                {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "field '{}' generates accessor '{}', which clashes with Object.{}()",
                                field.name, accessor, accessor
                            ),
                        )
                        .at(location),
                    );
                }
            }

            for query in &bo.queries {
                let location = format!("{}.queries.{}", bo.qualified_name, query.name);
                self.check_name(&query.name, "query", location.clone(), diagnostics);
                for param in &query.parameters {
                    self.check_name(
                        &param.name,
                        "query parameter",
                        format!("{}.{}", location, param.name),
                        diagnostics,
                    );
                }
            }
        }
    }
}
