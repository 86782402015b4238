use serde::Deserialize;

/// Return types that make a query yield many results.
pub const SEQUENCE_TYPES: &[&str] = &["java.util.List", "java.util.Collection", "List", "Collection"];

/// A named query declared on a business object.
///
/// The query text is opaque: it is carried through to the generated
/// metadata verbatim and never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    pub name: String,
    pub content: String,
    /// Qualified name of the owning business object for a single result,
    /// or a sequence type such as `java.util.List`
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

impl Query {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter (builder style)
    pub fn parameter(mut self, name: impl Into<String>, class_name: impl Into<String>) -> Self {
        self.add_parameter(name, class_name);
        self
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, class_name: impl Into<String>) {
        self.parameters.push(QueryParameter {
            name: name.into(),
            class_name: class_name.into(),
        });
    }

    /// Whether the declared return type is a sequence of entities.
    pub fn returns_sequence(&self) -> bool {
        let raw = self.return_type.trim();
        let base = match raw.find('<') {
            Some(idx) => raw[..idx].trim_end(),
            None => raw,
        };
        SEQUENCE_TYPES.contains(&base)
    }
}

/// A named, typed input to a query.
///
/// `class_name` is a raw target type name and is used as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryParameter {
    pub name: String,
    pub class_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_sequence() {
        for ty in [
            "java.util.List",
            "java.util.Collection",
            "List",
            "Collection",
            "java.util.List<org.bonitasoft.hr.Employee>",
            " List<Employee> ",
        ] {
            assert!(Query::new("q", "", ty).returns_sequence(), "{ty}");
        }
    }

    #[test]
    fn test_single_result() {
        for ty in ["org.bonitasoft.hr.Employee", "Employee", "java.util.Set", "Listing"] {
            assert!(!Query::new("q", "", ty).returns_sequence(), "{ty}");
        }
    }

    #[test]
    fn test_parameters_keep_declaration_order() {
        let query = Query::new("getEmployeesByNameAndAge", "SELECT e FROM Employee e", "java.util.List")
            .parameter("myName", "java.lang.String")
            .parameter("miEdad", "java.lang.Integer");

        let names: Vec<_> = query.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["myName", "miEdad"]);
        assert_eq!(query.parameters[1].class_name, "java.lang.Integer");
    }
}
