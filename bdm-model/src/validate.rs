//! Validation utilities for Java identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// model so nested validation can report where a problem lives.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "bom.toml");
/// ctx.validate_name("name", "field")?;
///
/// let nested = ctx.push("org.bonitasoft.hr.Employee");
/// nested.validate_name("findByName", "query")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'org.bonitasoft.hr.Employee'" or just
    /// "business object" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    pub fn find_last_span(&self, name: &str) -> Option<SourceSpan> {
        find_last_name_span(self.src, name)
    }

    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(name))
    }

    /// Validation error pointing at the last occurrence of `name`.
    pub fn duplicate_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_last_span(name))
    }

    pub fn reserved_keyword_error(&self, name: &str, kind: &str) -> Box<Error> {
        Error::reserved_keyword(
            name,
            self.context_for(kind),
            self.src,
            self.filename,
            self.find_span(name),
        )
    }

    pub fn invalid_identifier_error(&self, name: &str, kind: &str, reason: &str) -> Box<Error> {
        Error::invalid_identifier(
            name,
            self.context_for(kind),
            reason,
            self.src,
            self.filename,
            self.find_span(name),
        )
    }

    /// Validate that a name is a usable Java identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.reserved_keyword_error(name, kind));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.invalid_identifier_error(name, kind, reason));
        }

        Ok(())
    }

    /// Validate a dotted qualified name segment by segment.
    pub fn validate_qualified_name(&self, qualified_name: &str, kind: &str) -> Result<()> {
        if !qualified_name.contains('.') {
            return Err(self.invalid_identifier_error(
                qualified_name,
                kind,
                "qualified name must include a package, e.g. 'com.company.model.Invoice'",
            ));
        }

        for segment in qualified_name.split('.') {
            if is_java_keyword(segment) {
                return Err(self.reserved_keyword_error(segment, kind));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.invalid_identifier_error(qualified_name, kind, reason));
            }
        }

        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Contextual, but unusable as a type or variable name
    "_", "var",
];

pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Quoted forms a name takes as a TOML value.
fn value_patterns(name: &str) -> [String; 3] {
    [
        format!("= \"{}\"", name), // name = "x"
        format!("=\"{}\"", name),  // name="x"
        format!("\"{}\"", name),   // fields = ["x", ...]
    ]
}

/// Find the span of a name in the TOML source.
///
/// Searches for the name as a quoted value first, falling back to any
/// occurrence of the bare text.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for pattern in &value_patterns(name) {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Skip up to and including the opening quote
            let start = pos + pattern.len() - name.len() - 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}

/// Like [`find_name_span`], but returns the last occurrence.
pub(crate) fn find_last_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for pattern in &value_patterns(name) {
        if let Some(pos) = src.rfind(pattern.as_str()) {
            let start = pos + pattern.len() - name.len() - 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    src.rfind(name).map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved keyword");
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, numbers, underscores, and '$'");
    }

    None
}
