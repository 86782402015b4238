//! Shared naming helpers for code generation.

/// Upper-case the first character (e.g., "firstName" -> "FirstName")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Everything before the last dot of a qualified name, or "" when unqualified.
pub fn namespace_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(idx) => &qualified_name[..idx],
        None => "",
    }
}

/// The last dotted segment of a qualified name.
pub fn simple_name_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(idx) => &qualified_name[idx + 1..],
        None => qualified_name,
    }
}

/// Storage column name for a field (e.g., "firstName" -> "FIRSTNAME")
pub fn to_column_name(field_name: &str) -> String {
    field_name.to_uppercase()
}
