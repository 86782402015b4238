//! Compilation pipeline for code generation.
//!
//! A [`Pipeline`] takes a model through explicit phases (validate → build)
//! and collects diagnostics in a shared [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use bdm_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(model)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let generator = Generator::new(ctx.take_program()?);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
