use std::collections::HashSet;

use bdm_core::capitalize;
use bdm_model::BusinessObject;

use super::{
    entity::{PERSISTENCE_ID, validate_qualified_name},
    query::{build_signature, pagination_params},
    type_mapper::map_field_type,
};
use crate::{
    builder::{ClassSpec, MethodSpec, ParamSpec, TypeRef},
    error::{Error, Result},
};

/// Appended to the entity name to form its DAO name.
pub const DAO_SUFFIX: &str = "DAO";

/// Builds one DAO interface per business object.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaoBuilder;

impl DaoBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Qualified name of the DAO generated for `bo`.
    pub fn dao_name(bo: &BusinessObject) -> String {
        format!("{}{}", bo.qualified_name, DAO_SUFFIX)
    }

    /// Names of every DAO method in declaration order, duplicates included.
    pub fn method_names(bo: &BusinessObject) -> Vec<String> {
        Self::method_params(bo)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Every DAO method with its parameter names, in declaration order.
    pub fn method_params(bo: &BusinessObject) -> Vec<(String, Vec<String>)> {
        let mut methods = vec![
            ("findByPersistenceId".to_string(), vec![PERSISTENCE_ID.to_string()]),
            (
                "find".to_string(),
                pagination_params().into_iter().map(|p| p.name).collect(),
            ),
        ];
        methods.extend(
            bo.unique_constraints
                .iter()
                .map(|uc| (finder_name(&uc.fields), uc.fields.clone())),
        );
        methods.extend(bo.queries.iter().map(|q| {
            let signature = build_signature(q, bo);
            (
                signature.name,
                signature.params.into_iter().map(|p| p.name).collect(),
            )
        }));
        methods
    }

    pub fn build(&self, bo: &BusinessObject) -> Result<ClassSpec> {
        validate_qualified_name(&bo.qualified_name)?;
        let dao_name = Self::dao_name(bo);
        let entity = TypeRef::named(&bo.qualified_name);

        let mut methods = vec![
            MethodSpec::new("findByPersistenceId")
                .param(ParamSpec::new(
                    PERSISTENCE_ID,
                    TypeRef::optional(TypeRef::long()),
                ))
                .returns(entity.clone()),
            MethodSpec::new("find")
                .params(pagination_params())
                .returns(TypeRef::array(entity.clone())),
        ];

        for uc in &bo.unique_constraints {
            let mut finder = MethodSpec::new(finder_name(&uc.fields)).returns(entity.clone());
            for name in &uc.fields {
                let field = bo
                    .get_field(name)
                    .ok_or_else(|| Error::UnknownConstraintField {
                        business_object: bo.qualified_name.clone(),
                        constraint: uc.name.clone(),
                        field: name.clone(),
                    })?;
                finder = finder.param(ParamSpec::new(
                    name,
                    map_field_type(field.field_type).ty,
                ));
            }
            methods.push(finder);
        }

        methods.extend(bo.queries.iter().map(|q| build_signature(q, bo).into_method()));

        if let Some(method) = first_duplicate(methods.iter().map(|m| m.name.as_str())) {
            return Err(Error::DuplicateDaoMethod {
                dao: dao_name,
                method,
            });
        }

        for method in &methods {
            if let Some(param) = first_duplicate(method.params.iter().map(|p| p.name.as_str())) {
                return Err(Error::DuplicateParameter {
                    dao: dao_name,
                    method: method.name.clone(),
                    param,
                });
            }
        }

        Ok(ClassSpec::interface(dao_name).methods(methods))
    }
}

fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .find(|name| !seen.insert(*name))
        .map(str::to_string)
}

/// `findBy<Field1>And<Field2>` for a unique constraint.
fn finder_name(fields: &[String]) -> String {
    let joined: Vec<String> = fields.iter().map(|f| capitalize(f)).collect();
    format!("findBy{}", joined.join("And"))
}

#[cfg(test)]
mod tests {
    use bdm_core::FieldType;
    use bdm_model::{Field, Query};

    use super::*;

    fn employee() -> BusinessObject {
        BusinessObject::new("org.bonitasoft.hr.Employee")
            .field(Field::new("firstName", FieldType::String))
            .field(Field::new("age", FieldType::Integer))
    }

    fn names(dao: &ClassSpec) -> Vec<&str> {
        dao.methods.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_standard_methods() {
        let dao = DaoBuilder::new().build(&employee()).unwrap();

        assert!(dao.is_interface());
        assert_eq!(dao.qualified_name, "org.bonitasoft.hr.EmployeeDAO");
        assert_eq!(names(&dao), ["findByPersistenceId", "find"]);
        assert!(dao.methods.iter().all(MethodSpec::is_abstract));
        assert!(dao.tags.is_empty());
    }

    #[test]
    fn test_method_order() {
        let bo = employee()
            .unique_constraint("UC_NAME_AGE", ["firstName", "age"])
            .query(
                Query::new(
                    "findByFirstName",
                    "SELECT e FROM Employee e WHERE e.firstName = :firstName",
                    "org.bonitasoft.hr.Employee",
                )
                .parameter("firstName", "java.lang.String"),
            );
        let dao = DaoBuilder::new().build(&bo).unwrap();

        assert_eq!(
            names(&dao),
            [
                "findByPersistenceId",
                "find",
                "findByFirstNameAndAge",
                "findByFirstName",
            ]
        );
        assert_eq!(DaoBuilder::method_names(&bo), names(&dao));

        let finder = dao.find_method("findByFirstNameAndAge").unwrap();
        assert_eq!(finder.param_names(), ["firstName", "age"]);
        assert_eq!(finder.params[1].ty, TypeRef::optional(TypeRef::int()));
        assert_eq!(
            finder.return_type,
            TypeRef::named("org.bonitasoft.hr.Employee")
        );
    }

    #[test]
    fn test_duplicate_method() {
        let bo = employee().query(Query::new(
            "find",
            "SELECT e FROM Employee e",
            "java.util.List",
        ));

        let err = DaoBuilder::new().build(&bo).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateDaoMethod {
                dao: "org.bonitasoft.hr.EmployeeDAO".into(),
                method: "find".into(),
            }
        );
    }

    #[test]
    fn test_constraint_finder_collides_with_query() {
        let bo = employee()
            .unique_constraint("UC_AGE", ["age"])
            .query(Query::new(
                "findByAge",
                "SELECT e FROM Employee e WHERE e.age = :age",
                "org.bonitasoft.hr.Employee",
            ));

        let err = DaoBuilder::new().build(&bo).unwrap_err();
        assert!(matches!(err, Error::DuplicateDaoMethod { method, .. } if method == "findByAge"));
    }

    #[test]
    fn test_query_parameter_clashes_with_pagination() {
        let bo = employee().query(
            Query::new(
                "fromIndex",
                "SELECT e FROM Employee e WHERE e.age > :startIndex",
                "java.util.List",
            )
            .parameter("startIndex", "java.lang.Integer"),
        );

        let err = DaoBuilder::new().build(&bo).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateParameter {
                dao: "org.bonitasoft.hr.EmployeeDAO".into(),
                method: "fromIndex".into(),
                param: "startIndex".into(),
            }
        );
    }

    #[test]
    fn test_query_parameter_declared_twice() {
        let bo = employee().query(
            Query::new(
                "byAge",
                "SELECT e FROM Employee e WHERE e.age = :age",
                "org.bonitasoft.hr.Employee",
            )
            .parameter("age", "java.lang.Integer")
            .parameter("age", "java.lang.Long"),
        );

        let err = DaoBuilder::new().build(&bo).unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { method, param, .. }
            if method == "byAge" && param == "age"));
    }

    #[test]
    fn test_constraint_repeating_a_field() {
        let bo = employee().unique_constraint("UC_AGE", ["age", "age"]);

        let err = DaoBuilder::new().build(&bo).unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { method, param, .. }
            if method == "findByAgeAndAge" && param == "age"));
    }

    #[test]
    fn test_method_params() {
        let bo = employee().unique_constraint("UC_AGE", ["age"]).query(
            Query::new("all", "SELECT e FROM Employee e", "java.util.List")
                .parameter("age", "java.lang.Integer"),
        );

        assert_eq!(
            DaoBuilder::method_params(&bo),
            [
                ("findByPersistenceId".to_string(), vec!["persistenceId".to_string()]),
                (
                    "find".to_string(),
                    vec!["startIndex".to_string(), "maxResults".to_string()]
                ),
                ("findByAge".to_string(), vec!["age".to_string()]),
                (
                    "all".to_string(),
                    vec![
                        "age".to_string(),
                        "startIndex".to_string(),
                        "maxResults".to_string()
                    ]
                ),
            ]
        );
    }
}
