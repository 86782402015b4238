//! JavaFile abstraction for structured Java compilation units.
//!
//! Provides a high-level API for generating Java files with a package
//! declaration, organized imports and body content.

use bdm_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Java import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import(String);

impl Import {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("import {};", self.0))]
    }
}

/// A structured representation of one Java compilation unit.
///
/// # Example
///
/// ```
/// use bdm_codegen::builder::CodeFragment;
/// use bdm_codegen_java::{Import, JavaFile};
///
/// let file = JavaFile::new("org.acme")
///     .import(Import::new("java.util.Date"))
///     .fragments(vec![CodeFragment::line("public interface Marker {}")]);
///
/// assert_eq!(
///     file.render(),
///     "package org.acme;\n\nimport java.util.Date;\n\npublic interface Marker {}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaFile {
    package: String,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element from already-built fragments.
    pub fn fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.push(fragments);
        self
    }

    /// Render with 4-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::JAVA);

        if !self.package.is_empty() {
            builder.push_line(&format!("package {};", self.package));
        }

        if !self.imports.is_empty() {
            if !self.package.is_empty() {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            if !builder.as_str().is_empty() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.package.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}
