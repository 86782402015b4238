use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{BusinessObject, Error, Result, validate::ParseContext};

/// Root of a business data model, as read from `bom.toml`.
///
/// Business objects are unique by qualified name and keep their
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BusinessObjectModel {
    #[serde(default)]
    business_objects: Vec<BusinessObject>,
}

impl BusinessObjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a business object, rejecting a qualified name already present.
    pub fn add_business_object(&mut self, business_object: BusinessObject) -> Result<()> {
        if self.get(&business_object.qualified_name).is_some() {
            return Err(Box::new(Error::DuplicateBusinessObject {
                name: business_object.qualified_name,
            }));
        }
        self.business_objects.push(business_object);
        Ok(())
    }

    pub fn business_objects(&self) -> &[BusinessObject] {
        &self.business_objects
    }

    pub fn get(&self, qualified_name: &str) -> Option<&BusinessObject> {
        self.business_objects
            .iter()
            .find(|bo| bo.qualified_name == qualified_name)
    }

    pub fn len(&self) -> usize {
        self.business_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.business_objects.is_empty()
    }

    /// Parse a `bom.toml` file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a `bom.toml` from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }
}

impl FromStr for BusinessObjectModel {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "bom.toml")
    }
}

/// Parse a model from content with the given filename for error reporting.
fn parse_model(content: &str, filename: &str) -> Result<BusinessObjectModel> {
    let parsed: BusinessObjectModel =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_model(&parsed, content, filename)?;

    let mut model = BusinessObjectModel::new();
    for business_object in parsed.business_objects {
        model.add_business_object(business_object)?;
    }
    Ok(model)
}

/// Validate names and references before the model is accepted.
fn validate_model(model: &BusinessObjectModel, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let mut seen = HashSet::new();

    for bo in &model.business_objects {
        ctx.validate_qualified_name(&bo.qualified_name, "business object")?;
        if !seen.insert(bo.qualified_name.as_str()) {
            return Err(ctx.duplicate_error(
                format!("business object '{}' is defined more than once", bo.qualified_name),
                &bo.qualified_name,
            ));
        }

        validate_business_object(&ctx.push(&bo.qualified_name), bo)?;
    }
    Ok(())
}

fn validate_business_object(ctx: &ParseContext<'_>, bo: &BusinessObject) -> Result<()> {
    let mut fields = HashSet::new();
    for field in &bo.fields {
        ctx.validate_name(&field.name, "field")?;
        if !fields.insert(field.name.as_str()) {
            return Err(ctx.duplicate_error(
                format!("field '{}' is declared more than once", field.name),
                &field.name,
            ));
        }
    }

    let mut queries = HashSet::new();
    for query in &bo.queries {
        ctx.validate_name(&query.name, "query")?;
        if !queries.insert(query.name.as_str()) {
            return Err(ctx.duplicate_error(
                format!("query '{}' is declared more than once", query.name),
                &query.name,
            ));
        }

        let query_ctx = ctx.push(&query.name);
        for param in &query.parameters {
            query_ctx.validate_name(&param.name, "query parameter")?;
        }
    }

    for constraint in &bo.unique_constraints {
        if constraint.fields.is_empty() {
            return Err(ctx.validation_error(
                format!("unique constraint '{}' has no fields", constraint.name),
                &constraint.name,
            ));
        }
        for field in &constraint.fields {
            if bo.get_field(field).is_none() {
                return Err(ctx.validation_error(
                    format!(
                        "unique constraint '{}' references unknown field '{}'",
                        constraint.name, field
                    ),
                    field,
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bdm_core::FieldType;
    use tempfile::TempDir;

    use super::*;
    use crate::{Field, Query};

    const EMPLOYEE: &str = r#"
[[business_objects]]
qualified_name = "org.bonitasoft.hr.Employee"
description = "An employee"

[[business_objects.fields]]
name = "name"
type = "STRING"
length = 45
nullable = false

[[business_objects.fields]]
name = "age"
type = "integer"

[[business_objects.queries]]
name = "findByName"
content = "SELECT e FROM Employee e WHERE e.name = :name"
return_type = "org.bonitasoft.hr.Employee"
parameters = [{ name = "name", class_name = "java.lang.String" }]

[[business_objects.unique_constraints]]
name = "UC_NAME"
fields = ["name"]
"#;

    #[test]
    fn test_parse_model() {
        let model: BusinessObjectModel = EMPLOYEE.parse().unwrap();
        assert_eq!(model.len(), 1);

        let bo = model.get("org.bonitasoft.hr.Employee").unwrap();
        assert_eq!(bo.description.as_deref(), Some("An employee"));
        assert_eq!(bo.fields[0], Field::new("name", FieldType::String).length(45).not_null());
        assert_eq!(bo.fields[1], Field::new("age", FieldType::Integer));
        assert_eq!(
            bo.queries[0],
            Query::new(
                "findByName",
                "SELECT e FROM Employee e WHERE e.name = :name",
                "org.bonitasoft.hr.Employee"
            )
            .parameter("name", "java.lang.String")
        );
        assert_eq!(bo.unique_constraints[0].fields, ["name"]);
    }

    #[test]
    fn test_parse_empty_model() {
        let model: BusinessObjectModel = "".parse().unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_preserves_declaration_order() {
        let model: BusinessObjectModel = r#"
[[business_objects]]
qualified_name = "org.acme.Zebra"

[[business_objects]]
qualified_name = "org.acme.Aardvark"
"#
        .parse()
        .unwrap();

        let names: Vec<_> = model
            .business_objects()
            .iter()
            .map(|bo| bo.simple_name())
            .collect();
        assert_eq!(names, ["Zebra", "Aardvark"]);
    }

    #[test]
    fn test_unknown_field_type() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "org.acme.Invoice"
fields = [{ name = "total", type = "MONEY" }]
"#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_business_object() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "org.acme.Invoice"

[[business_objects]]
qualified_name = "org.acme.Invoice"
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn test_duplicate_field() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "org.acme.Invoice"
fields = [{ name = "total", type = "DOUBLE" }, { name = "total", type = "LONG" }]
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("field 'total' is declared more than once"));
    }

    #[test]
    fn test_unique_constraint_unknown_field() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "org.acme.Invoice"
fields = [{ name = "number", type = "STRING" }]
unique_constraints = [{ name = "UC_REF", fields = ["reference"] }]
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown field 'reference'"));
    }

    #[test]
    fn test_keyword_field_name() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "org.acme.Invoice"
fields = [{ name = "class", type = "STRING" }]
"#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_unqualified_business_object() {
        let err = BusinessObjectModel::from_str(
            r#"
[[business_objects]]
qualified_name = "Invoice"
"#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_add_business_object_rejects_duplicates() {
        let mut model = BusinessObjectModel::new();
        model
            .add_business_object(BusinessObject::new("org.acme.Invoice"))
            .unwrap();

        let err = model
            .add_business_object(BusinessObject::new("org.acme.Invoice"))
            .unwrap_err();
        assert!(matches!(*err, Error::DuplicateBusinessObject { ref name } if name == "org.acme.Invoice"));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bom.toml");
        fs::write(&path, EMPLOYEE).unwrap();

        let model = BusinessObjectModel::from_file(&path).unwrap();
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = BusinessObjectModel::from_file(temp.path().join("bom.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
