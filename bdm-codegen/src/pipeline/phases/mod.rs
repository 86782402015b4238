//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the model and collects diagnostics
//! - [`BuildPhase`] - builds the entity and DAO program

mod build;
mod validate;

pub use build::BuildPhase;
pub use validate::{
    DaoMethodLint, DuplicateFieldLint, IdentifierLint, Lint, LintInfo, QueryReturnTypeLint,
    ReservedNameLint, TypeCollisionLint, UniqueConstraintLint, ValidatePhase,
};
