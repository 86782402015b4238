//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order of modules for deterministic output, and
/// sorted symbols within each module.
///
/// # Example
///
/// ```
/// use bdm_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("javax.persistence", "Entity");
/// imports.add("javax.persistence", "Column");
/// imports.add("java.util", "List");
///
/// assert_eq!(
///     imports.qualified("."),
///     ["java.util.List", "javax.persistence.Column", "javax.persistence.Entity"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// The module a symbol is imported from, if any.
    pub fn owner_of(&self, symbol: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|(_, symbols)| symbols.contains(symbol))
            .map(|(module, _)| module.as_str())
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every imported symbol joined to its module, sorted.
    pub fn qualified(&self, separator: &str) -> Vec<String> {
        let mut all: Vec<String> = self
            .imports
            .iter()
            .flat_map(|(module, symbols)| {
                symbols
                    .iter()
                    .map(move |symbol| format!("{module}{separator}{symbol}"))
            })
            .collect();
        all.sort();
        all
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
