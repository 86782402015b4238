//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Mutable API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//!
//! # Declarative Type Specifications
//!
//! - [`ClassSpec`], [`FieldSpec`], [`MetadataTag`] - Class definitions
//! - [`MethodSpec`] - Method definitions with semantic bodies
//! - [`TypeRef`] - Language-agnostic type references
//! - [`TypeMapper`] - Trait for language-specific type rendering

mod code_builder;
mod function;
mod indent;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use function::{MethodBody, MethodSpec, ParamSpec};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use structure::{
    ClassKind, ClassRenderer, ClassSpec, FieldSpec, MetadataTag, TagKind, TagValue, VALUE_ATTR,
};
pub use types::{PrimitiveType, TypeMapper, TypeRef, Visibility};
