//! Abstract field types of the business data model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// Supported field types in the business object model.
///
/// This is a language-agnostic representation of field types.
/// The code generator maps each variant to a target type and its
/// persistence metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Text,
    Integer,
    Long,
    Double,
    Float,
    Boolean,
    Date,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 8] = [
        FieldType::String,
        FieldType::Text,
        FieldType::Integer,
        FieldType::Long,
        FieldType::Double,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Date,
    ];

    /// Get the model type name (used in bom.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Text => "TEXT",
            FieldType::Integer => "INTEGER",
            FieldType::Long => "LONG",
            FieldType::Double => "DOUBLE",
            FieldType::Float => "FLOAT",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Date => "DATE",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field type name is not one of [`FieldType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type '{0}', expected one of STRING, TEXT, INTEGER, LONG, DOUBLE, FLOAT, BOOLEAN, DATE")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
