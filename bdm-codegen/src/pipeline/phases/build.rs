//! Build phase - turns the model into the generated program.

use eyre::{Result, WrapErr};

use crate::{
    pipeline::{CompilationContext, Phase},
    program::{DaoBuilder, EntityBuilder, Program},
};

/// Phase that builds one entity class and one DAO interface per business
/// object, in model order.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build entity classes and DAO interfaces"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let entities = EntityBuilder::new(ctx.variant);
        let daos = DaoBuilder::new();
        let mut program = Program::new();

        for bo in ctx.model.business_objects() {
            let entity = entities
                .build(bo)
                .wrap_err_with(|| format!("failed to build entity '{}'", bo.qualified_name))?;
            let dao = daos
                .build(bo)
                .wrap_err_with(|| format!("failed to build DAO for '{}'", bo.qualified_name))?;

            tracing::debug!(
                business_object = %bo.qualified_name,
                fields = entity.fields.len(),
                dao_methods = dao.methods.len(),
                "built business object"
            );

            program.insert(entity)?;
            program.insert(dao)?;
        }

        ctx.program = Some(program);
        Ok(())
    }
}
