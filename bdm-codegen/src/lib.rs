//! Language-agnostic program model and pipeline for the BDM code generator.
//!
//! This crate turns a [`bdm_model::BusinessObjectModel`] into a [`Program`]
//! of entity classes and DAO interfaces that language renderers such as
//! `bdm-codegen-java` serialize to source files.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, ClassSpec, TypeRef, etc.)
//! - [`program`] - Type mapping, entity and DAO construction
//! - [`pipeline`] - Validate and build phases with lint diagnostics
//! - [`generation`] - Output management (ImportCollector, FileRegistry)
//! - [`language`] - Language generator trait

pub mod builder;
mod error;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod program;

pub use error::{Error, Result};
pub use program::{Program, Variant};
