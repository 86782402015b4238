//! Import resolution for a single Java compilation unit.

use std::collections::HashMap;

use bdm_codegen::generation::ImportCollector;
use bdm_core::{namespace_of, simple_name_of};

/// Package whose types are visible without an import.
const IMPLICIT_PACKAGE: &str = "java.lang";

/// Decides how each qualified type name is written in one source file.
///
/// The first type to use a simple name claims it: same-package and
/// `java.lang` types are written by simple name without an import, other
/// packages are imported. Later types sharing the simple name stay fully
/// qualified.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    package: String,
    claimed: HashMap<String, String>,
    imports: ImportCollector,
}

impl ImportResolver {
    /// Resolver for a file declaring `qualified_name`.
    ///
    /// The declared type's simple name is claimed up front.
    pub fn new(qualified_name: &str) -> Self {
        let mut claimed = HashMap::new();
        claimed.insert(
            simple_name_of(qualified_name).to_string(),
            qualified_name.to_string(),
        );
        Self {
            package: namespace_of(qualified_name).to_string(),
            claimed,
            imports: ImportCollector::new(),
        }
    }

    /// How `qualified_name` is written in this file.
    ///
    /// Unqualified and generic names are returned unchanged.
    pub fn resolve(&mut self, qualified_name: &str) -> String {
        let package = namespace_of(qualified_name);
        if package.is_empty() || qualified_name.contains(['<', '[']) {
            return qualified_name.to_string();
        }

        let simple = simple_name_of(qualified_name);
        match self.claimed.get(simple) {
            Some(owner) if owner == qualified_name => return simple.to_string(),
            Some(_) => return qualified_name.to_string(),
            None => {}
        }

        self.claimed
            .insert(simple.to_string(), qualified_name.to_string());
        if package != IMPLICIT_PACKAGE && package != self.package {
            self.imports.add(package, simple);
        }
        simple.to_string()
    }

    /// Import lines' targets, sorted.
    pub fn imports(&self) -> Vec<String> {
        self.imports.qualified(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_other_package() {
        let mut resolver = ImportResolver::new("org.acme.Invoice");
        assert_eq!(resolver.resolve("java.util.Date"), "Date");
        assert_eq!(resolver.resolve("java.util.Date"), "Date");
        assert_eq!(resolver.imports(), ["java.util.Date"]);
    }

    #[test]
    fn test_implicit_and_same_package() {
        let mut resolver = ImportResolver::new("org.acme.InvoiceDAO");
        assert_eq!(resolver.resolve("java.lang.String"), "String");
        assert_eq!(resolver.resolve("org.acme.Invoice"), "Invoice");
        assert!(resolver.imports().is_empty());
    }

    #[test]
    fn test_clash_stays_qualified() {
        let mut resolver = ImportResolver::new("org.acme.Invoice");
        assert_eq!(resolver.resolve("javax.persistence.Entity"), "Entity");
        assert_eq!(
            resolver.resolve("com.bonitasoft.engine.bdm.Entity"),
            "com.bonitasoft.engine.bdm.Entity"
        );
        assert_eq!(resolver.imports(), ["javax.persistence.Entity"]);
    }

    #[test]
    fn test_own_name_is_claimed() {
        let mut resolver = ImportResolver::new("org.acme.Invoice");
        assert_eq!(resolver.resolve("org.other.Invoice"), "org.other.Invoice");
        assert_eq!(resolver.resolve("org.acme.Invoice"), "Invoice");
    }

    #[test]
    fn test_passthrough() {
        let mut resolver = ImportResolver::new("org.acme.Invoice");
        assert_eq!(resolver.resolve("int"), "int");
        assert_eq!(
            resolver.resolve("java.util.List<java.lang.String>"),
            "java.util.List<java.lang.String>"
        );
        assert!(resolver.imports().is_empty());
    }
}
