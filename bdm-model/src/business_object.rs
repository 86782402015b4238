use bdm_core::{namespace_of, simple_name_of};
use serde::Deserialize;

use crate::{Field, Query};

/// A domain entity type declared in the model
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessObject {
    /// Dotted namespace followed by the simple name
    pub qualified_name: String,

    /// Rendered as documentation on the generated entity
    pub description: Option<String>,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub queries: Vec<Query>,

    #[serde(default)]
    pub unique_constraints: Vec<UniqueConstraint>,
}

impl BusinessObject {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            description: None,
            fields: Vec::new(),
            queries: Vec::new(),
            unique_constraints: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    pub fn unique_constraint<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_unique_constraint(name, fields);
        self
    }

    pub fn add_field(&mut self, field: Field) -> &mut Field {
        self.fields.push(field);
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    /// Declare a query and return it so parameters can be added.
    pub fn add_query(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        return_type: impl Into<String>,
    ) -> &mut Query {
        self.queries.push(Query::new(name, content, return_type));
        let last = self.queries.len() - 1;
        &mut self.queries[last]
    }

    pub fn add_unique_constraint<I, S>(
        &mut self,
        name: impl Into<String>,
        fields: I,
    ) -> &mut UniqueConstraint
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_constraints.push(UniqueConstraint {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        });
        let last = self.unique_constraints.len() - 1;
        &mut self.unique_constraints[last]
    }

    /// All but the last dotted segment of the qualified name.
    pub fn namespace(&self) -> &str {
        namespace_of(&self.qualified_name)
    }

    /// The last dotted segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A named set of fields whose combined values must be unique
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UniqueConstraint {
    pub name: String,
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use bdm_core::FieldType;

    use super::*;

    #[test]
    fn test_namespace_and_simple_name() {
        let bo = BusinessObject::new("org.bonitasoft.hr.Employee");
        assert_eq!(bo.namespace(), "org.bonitasoft.hr");
        assert_eq!(bo.simple_name(), "Employee");

        let bo = BusinessObject::new("Employee");
        assert_eq!(bo.namespace(), "");
        assert_eq!(bo.simple_name(), "Employee");
    }

    #[test]
    fn test_add_field_returns_field() {
        let mut bo = BusinessObject::new("org.bonitasoft.hr.Employee");
        bo.add_field(Field::new("name", FieldType::String)).length = Some(45);

        assert_eq!(bo.fields[0].column_length(), Some(45));
    }

    #[test]
    fn test_add_query_returns_query_for_parameters() {
        let mut bo = BusinessObject::new("org.bonitasoft.hr.Employee");
        bo.add_query("findByName", "SELECT e FROM Employee e", "org.bonitasoft.hr.Employee")
            .add_parameter("name", "java.lang.String");

        assert_eq!(bo.queries.len(), 1);
        assert_eq!(bo.queries[0].parameters[0].name, "name");
    }

    #[test]
    fn test_add_unique_constraint() {
        let mut bo = BusinessObject::new("org.bonitasoft.hr.Employee")
            .field(Field::new("firstName", FieldType::String))
            .field(Field::new("lastName", FieldType::String));
        bo.add_unique_constraint("TOTO", ["firstName", "lastName"]);

        assert_eq!(
            bo.unique_constraints,
            vec![UniqueConstraint {
                name: "TOTO".to_string(),
                fields: vec!["firstName".to_string(), "lastName".to_string()],
            }]
        );
    }

    #[test]
    fn test_get_field() {
        let bo = BusinessObject::new("org.bonitasoft.hr.Employee")
            .field(Field::new("age", FieldType::Integer));

        assert_eq!(bo.get_field("age").map(|f| f.field_type), Some(FieldType::Integer));
        assert!(bo.get_field("name").is_none());
    }
}
