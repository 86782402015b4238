//! Business object model types and `bom.toml` parsing.
//!
//! A [`BusinessObjectModel`] is either built in code or parsed from a
//! `bom.toml` file. Parsing validates names and references and reports
//! problems as [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod business_object;
mod error;
mod field;
mod model;
mod query;
mod validate;

pub use bdm_core::FieldType;
pub use business_object::{BusinessObject, UniqueConstraint};
pub use error::{Error, Result};
pub use field::{DEFAULT_STRING_LENGTH, Field};
pub use model::BusinessObjectModel;
pub use query::{Query, QueryParameter, SEQUENCE_TYPES};
pub use validate::{JAVA_KEYWORDS, ParseContext, is_java_keyword, validate_identifier};
