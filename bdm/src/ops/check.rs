//! Check operation - model validation.

use std::path::Path;

use bdm_codegen::pipeline::Pipeline;
use bdm_model::BusinessObjectModel;

use crate::reports::CheckReport;

/// Run every lint on the model and collect the diagnostics.
///
/// Unlike generation, errors do not stop the run: all lints report.
pub fn check(model: BusinessObjectModel, model_path: &Path) -> CheckReport {
    let business_objects = model
        .business_objects()
        .iter()
        .map(|bo| bo.qualified_name.clone())
        .collect();
    let ctx = Pipeline::new().check(model);

    CheckReport {
        model_path: model_path.to_path_buf(),
        business_objects,
        diagnostics: ctx.diagnostics,
    }
}
