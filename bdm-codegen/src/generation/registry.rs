//! File registration for declarative code generation.
//!
//! Generators register every rendered file up front. The registry can then
//! preview them or write them all at once.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::for_class("org.acme.Invoice", "java", source));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use bdm_core::{File, namespace_of, simple_name_of};
use eyre::Result;

/// A file to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from the output directory, `/`-separated.
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Entry for a top-level type: namespace segments become directories.
    pub fn for_class(qualified_name: &str, extension: &str, content: impl Into<String>) -> Self {
        let file_name = format!("{}.{}", simple_name_of(qualified_name), extension);
        let path = match namespace_of(qualified_name) {
            "" => file_name,
            namespace => format!("{}/{}", namespace.replace('.', "/"), file_name),
        };
        Self::new(path, content)
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path.split('/').fold(base.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

/// Registry for collecting and writing generated files.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        self.entries.extend(entries);
    }

    /// Registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries
            .iter()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files under `base`, replacing existing ones.
    ///
    /// Every file is staged next to its target before any target is
    /// replaced, so a staging failure leaves the output directory untouched.
    pub fn write_all(&self, base: &Path) -> Result<Vec<PathBuf>> {
        let staged = self
            .entries
            .iter()
            .map(|e| File::new(e.full_path(base), e.content.as_str()).stage())
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = staged.len(), "staged generated files");

        let mut written = Vec::with_capacity(staged.len());
        for file in staged {
            let path = file.commit()?;
            tracing::debug!(path = %path.display(), "wrote file");
            written.push(path);
        }
        Ok(written)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Relative path from output directory.
    pub path: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_for_class_path() {
        let entry = FileEntry::for_class("org.bonitasoft.hr.Employee", "java", "");
        assert_eq!(entry.path, "org/bonitasoft/hr/Employee.java");

        let entry = FileEntry::for_class("Employee", "java", "");
        assert_eq!(entry.path, "Employee.java");
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::for_class("org.acme.Invoice", "java", "class"));
        registry.register(FileEntry::for_class("org.acme.InvoiceDAO", "java", "interface"));

        let written = registry.write_all(temp.path()).unwrap();

        assert_eq!(written.len(), 2);
        let invoice = temp.path().join("org").join("acme").join("Invoice.java");
        assert_eq!(written[0], invoice);
        assert_eq!(std::fs::read_to_string(invoice).unwrap(), "class");
    }

    #[test]
    fn test_existing_file_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Invoice.java");
        std::fs::write(&path, "old").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("Invoice.java", "new"));
        registry.write_all(temp.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_staging_failure_touches_nothing() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is needed makes staging fail.
        std::fs::write(temp.path().join("blocked"), "").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a/First.java", "first"));
        registry.register(FileEntry::new("blocked/Second.java", "second"));

        assert!(registry.write_all(temp.path()).is_err());
        assert!(!temp.path().join("a").join("First.java").exists());
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.java", "content a"));
        registry.register(FileEntry::new("b.java", "content b"));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, "a.java");
        assert_eq!(preview[1].content, "content b");
        assert_eq!(registry.get("b.java").map(|e| e.content.as_str()), Some("content b"));
    }
}
