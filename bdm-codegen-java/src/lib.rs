//! Java rendering of the BDM program representation.
//!
//! [`Generator`] renders every class node of a [`Program`](bdm_codegen::Program)
//! to a Java compilation unit: JPA entities with accessors and DAO interfaces.

mod annotations;
mod class_renderer;
mod generator;
mod imports;
mod java_file;
mod type_mapper;

pub use annotations::{annotation_type, string_literal};
pub use bdm_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use class_renderer::JavaClassRenderer;
pub use generator::{Generator, GeneratorOptions};
pub use imports::ImportResolver;
pub use java_file::{Import, JavaFile};
pub use type_mapper::JavaTypeMapper;
