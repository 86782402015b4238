//! Core utilities and types for the BDM code generator.
//!
//! This crate provides the fundamental types shared by the model, the
//! code generation pipeline and the language renderers.

mod field_type;
mod file;
mod utils;

// Fundamental types
pub use field_type::{FieldType, UnknownFieldType};
// File operations
pub use file::{File, StagedFile};
// String utilities
pub use utils::{capitalize, namespace_of, simple_name_of, to_column_name};
