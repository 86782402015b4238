//! Lint for DAO method name collisions.

use std::collections::HashSet;

use bdm_model::BusinessObjectModel;

use super::super::Lint;
use crate::{pipeline::Diagnostic, program::DaoBuilder};

/// Lint that errors when one DAO would declare the same method twice, or a
/// method would declare the same parameter twice.
///
/// Queries compete with the standard finders and with the finders derived
/// from unique constraints. Their parameters compete with the pagination
/// parameters of sequence results.
pub struct DaoMethodLint;

impl Lint for DaoMethodLint {
    fn name(&self) -> &'static str {
        "dao-method"
    }

    fn description(&self) -> &'static str {
        "Detect DAO methods or method parameters with the same name"
    }

    fn check(&self, model: &BusinessObjectModel, diagnostics: &mut Vec<Diagnostic>) {
        for bo in model.business_objects() {
            let dao = DaoBuilder::dao_name(bo);
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();

            for (name, params) in DaoBuilder::method_params(bo) {
                let location = format!("{}.queries.{}", bo.qualified_name, name);

                let mut seen_params = HashSet::new();
                if let Some(param) = params.iter().find(|p| !seen_params.insert(p.as_str())) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "method '{}' of DAO '{}' declares parameter '{}' more than once",
                                name, dao, param
                            ),
                        )
                        .at(location.clone()),
                    );
                }

                if !seen.insert(name.clone()) && reported.insert(name.clone()) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("DAO '{}' declares method '{}' more than once", dao, name),
                        )
                        .at(location),
                    );
                }
            }
        }
    }
}
