//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to render the program representation in a new
/// target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Absolute paths of every file written
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
