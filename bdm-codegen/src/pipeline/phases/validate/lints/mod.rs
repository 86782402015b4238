//! Built-in lints for model validation.

mod dao_method;
mod duplicate_field;
mod identifier;
mod query_return_type;
mod reserved_name;
mod type_collision;
mod unique_constraint;

pub use dao_method::DaoMethodLint;
pub use duplicate_field::DuplicateFieldLint;
pub use identifier::{IdentifierLint, OBJECT_METHODS};
pub use query_return_type::QueryReturnTypeLint;
pub use reserved_name::ReservedNameLint;
pub use type_collision::TypeCollisionLint;
pub use unique_constraint::UniqueConstraintLint;

#[cfg(test)]
pub(crate) fn model_of(
    business_objects: impl IntoIterator<Item = bdm_model::BusinessObject>,
) -> bdm_model::BusinessObjectModel {
    let mut model = bdm_model::BusinessObjectModel::new();
    for bo in business_objects {
        model.add_business_object(bo).unwrap();
    }
    model
}
