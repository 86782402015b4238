use bdm_core::FieldType;
use bdm_model::DEFAULT_STRING_LENGTH;

use crate::builder::{MetadataTag, PrimitiveType, TagKind, TagValue, TypeRef};

/// Target type and metadata tags for one field type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    pub ty: TypeRef,
    pub tags: Vec<MetadataTag>,
}

/// Map a model field type to its nullable target type and default tags.
///
/// The first tag is always the column tag.
pub fn map_field_type(field_type: FieldType) -> FieldMapping {
    let column = MetadataTag::new(TagKind::Column).bool_attr("nullable", true);

    let (primitive, tags) = match field_type {
        FieldType::String => (
            PrimitiveType::String,
            vec![column.int_attr("length", i64::from(DEFAULT_STRING_LENGTH))],
        ),
        FieldType::Text => (
            PrimitiveType::String,
            vec![column, MetadataTag::new(TagKind::Lob)],
        ),
        FieldType::Date => (
            PrimitiveType::DateTime,
            vec![
                column,
                MetadataTag::new(TagKind::Temporal).value(TagValue::Enum("TIMESTAMP".into())),
            ],
        ),
        FieldType::Integer => (PrimitiveType::Int, vec![column]),
        FieldType::Long => (PrimitiveType::Long, vec![column]),
        FieldType::Double => (PrimitiveType::Double, vec![column]),
        FieldType::Float => (PrimitiveType::Float, vec![column]),
        FieldType::Boolean => (PrimitiveType::Bool, vec![column]),
    };

    FieldMapping {
        ty: TypeRef::optional(TypeRef::primitive(primitive)),
        tags,
    }
}
