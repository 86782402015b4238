use thiserror::Error;

/// Result type for program construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the program from a model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid qualified name '{name}': {reason}")]
    InvalidQualifiedName { name: String, reason: String },

    #[error("DAO '{dao}' declares method '{method}' more than once")]
    DuplicateDaoMethod { dao: String, method: String },

    #[error("method '{method}' of DAO '{dao}' declares parameter '{param}' more than once")]
    DuplicateParameter {
        dao: String,
        method: String,
        param: String,
    },

    #[error("unique constraint '{constraint}' on '{business_object}' references unknown field '{field}'")]
    UnknownConstraintField {
        business_object: String,
        constraint: String,
        field: String,
    },

    #[error("type '{name}' is generated more than once")]
    DuplicateClass { name: String },
}

impl Error {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQualifiedName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
