use bdm_core::{FieldType, capitalize, to_column_name};
use bdm_model::{BusinessObject, Field};

use super::{Variant, type_mapper::map_field_type};
use crate::{
    builder::{
        ClassSpec, FieldSpec, MetadataTag, MethodBody, MethodSpec, ParamSpec, TagKind, TagValue,
        TypeRef,
    },
    error::{Error, Result},
};

/// Capability marker implemented by every server-side entity.
pub const ENTITY_MARKER: &str = "com.bonitasoft.engine.bdm.Entity";

/// Generated identity field.
pub const PERSISTENCE_ID: &str = "persistenceId";

/// Generated optimistic-locking field.
pub const PERSISTENCE_VERSION: &str = "persistenceVersion";

/// Simple names that would shadow built-in target types.
pub const RESERVED_SIMPLE_NAMES: &[&str] = &[
    "Boolean",
    "Class",
    "Collection",
    "Date",
    "Double",
    "Entity",
    "Float",
    "Integer",
    "List",
    "Long",
    "Object",
    "Objects",
    "Override",
    "String",
];

const RESERVED_NAMESPACES: &[&str] = &["java.", "javax."];

/// Builds one entity class per business object.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityBuilder {
    variant: Variant,
}

impl EntityBuilder {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn build(&self, bo: &BusinessObject) -> Result<ClassSpec> {
        validate_qualified_name(&bo.qualified_name)?;
        let simple_name = bo.simple_name();

        let mut class = ClassSpec::class(&bo.qualified_name)
            .tag(MetadataTag::new(TagKind::Entity).str_attr("name", simple_name))
            .tag(table_tag(bo)?)
            .implements(ENTITY_MARKER);

        if let Some(description) = &bo.description {
            class = class.doc(description);
        }

        if !bo.queries.is_empty() {
            let queries = bo
                .queries
                .iter()
                .map(|q| {
                    MetadataTag::new(TagKind::NamedQuery)
                        .str_attr("name", &q.name)
                        .str_attr("query", &q.content)
                })
                .collect();
            class = class
                .tag(MetadataTag::new(TagKind::NamedQueries).value(TagValue::Tags(queries)));
        }

        for field in &bo.fields {
            let mapping = map_field_type(field.field_type);
            let spec = FieldSpec::new(&field.name, mapping.ty.clone())
                .tag(column_tag(field))
                .tags(mapping.tags.into_iter().skip(1));
            class = class
                .field(spec)
                .methods(accessors(&field.name, &mapping.ty, field.field_type));
        }

        let id_ty = TypeRef::optional(TypeRef::long());
        class = class
            .field(
                FieldSpec::new(PERSISTENCE_ID, id_ty.clone())
                    .tag(MetadataTag::new(TagKind::Id))
                    .tag(MetadataTag::new(TagKind::GeneratedValue)),
            )
            .methods(accessors(PERSISTENCE_ID, &id_ty, FieldType::Long))
            .field(
                FieldSpec::new(PERSISTENCE_VERSION, id_ty.clone())
                    .tag(MetadataTag::new(TagKind::Version)),
            )
            .methods(accessors(PERSISTENCE_VERSION, &id_ty, FieldType::Long));

        let compared: Vec<String> = bo
            .fields
            .iter()
            .map(|f| f.name.clone())
            .chain(std::iter::once(PERSISTENCE_ID.to_string()))
            .collect();

        class = class
            .method(
                MethodSpec::new("equals")
                    .param(ParamSpec::new("obj", TypeRef::named("java.lang.Object")))
                    .returns(TypeRef::bool())
                    .tag(MetadataTag::new(TagKind::Override))
                    .body(MethodBody::Equals {
                        fields: compared.clone(),
                    }),
            )
            .method(
                MethodSpec::new("hashCode")
                    .returns(TypeRef::int())
                    .tag(MetadataTag::new(TagKind::Override))
                    .body(MethodBody::HashCode { fields: compared }),
            );

        Ok(match self.variant {
            Variant::Server => class,
            Variant::Client => class.without_persistence(),
        })
    }
}

/// Reject names that cannot become a generated top-level type.
pub(crate) fn validate_qualified_name(qualified_name: &str) -> Result<()> {
    let namespace = bdm_core::namespace_of(qualified_name);
    if namespace.is_empty() {
        return Err(Error::invalid_name(qualified_name, "a package is required"));
    }
    if RESERVED_NAMESPACES
        .iter()
        .any(|ns| qualified_name.starts_with(ns))
    {
        return Err(Error::invalid_name(
            qualified_name,
            "the java and javax packages are reserved",
        ));
    }
    let simple_name = bdm_core::simple_name_of(qualified_name);
    if RESERVED_SIMPLE_NAMES.contains(&simple_name) {
        return Err(Error::invalid_name(
            qualified_name,
            format!("'{simple_name}' collides with a built-in type"),
        ));
    }
    Ok(())
}

fn table_tag(bo: &BusinessObject) -> Result<MetadataTag> {
    let mut tag =
        MetadataTag::new(TagKind::Table).str_attr("name", to_column_name(bo.simple_name()));
    if bo.unique_constraints.is_empty() {
        return Ok(tag);
    }

    let mut constraints = Vec::with_capacity(bo.unique_constraints.len());
    for uc in &bo.unique_constraints {
        if let Some(missing) = uc.fields.iter().find(|f| bo.get_field(f).is_none()) {
            return Err(Error::UnknownConstraintField {
                business_object: bo.qualified_name.clone(),
                constraint: uc.name.clone(),
                field: missing.clone(),
            });
        }
        constraints.push(
            MetadataTag::new(TagKind::UniqueConstraint)
                .str_attr("name", &uc.name)
                .attr(
                    "column_names",
                    TagValue::StrList(uc.fields.iter().map(|f| to_column_name(f)).collect()),
                ),
        );
    }
    tag = tag.attr("unique_constraints", TagValue::Tags(constraints));
    Ok(tag)
}

fn column_tag(field: &Field) -> MetadataTag {
    let tag = MetadataTag::new(TagKind::Column)
        .str_attr("name", to_column_name(&field.name))
        .bool_attr("nullable", field.nullable);
    match field.column_length() {
        Some(length) => tag.int_attr("length", i64::from(length)),
        None => tag,
    }
}

/// `is<Name>` for booleans, `get<Name>` otherwise.
pub fn getter_name(field: &str, field_type: FieldType) -> String {
    let prefix = if field_type == FieldType::Boolean {
        "is"
    } else {
        "get"
    };
    format!("{prefix}{}", capitalize(field))
}

pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}

/// Setter then getter for one field.
fn accessors(name: &str, ty: &TypeRef, field_type: FieldType) -> [MethodSpec; 2] {
    [
        MethodSpec::new(setter_name(name))
            .param(ParamSpec::new(name, ty.clone()))
            .body(MethodBody::Setter {
                field: name.to_string(),
                param: name.to_string(),
            }),
        MethodSpec::new(getter_name(name, field_type))
            .returns(ty.clone())
            .body(MethodBody::Getter {
                field: name.to_string(),
            }),
    ]
}
