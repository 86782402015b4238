use bdm_core::FieldType;
use serde::Deserialize;

/// Column length used for STRING fields that declare none.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// A typed attribute of a business object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Field name, used verbatim for the storage slot
    pub name: String,

    /// Abstract field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the column accepts null
    #[serde(default = "default_true")]
    pub nullable: bool,

    /// Maximum length, only meaningful for STRING fields
    #[serde(default)]
    pub length: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
            length: None,
        }
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn not_null(self) -> Self {
        self.nullable(false)
    }

    /// Effective column length: the declared or default length for STRING
    /// fields, `None` for every other type.
    pub fn column_length(&self) -> Option<u32> {
        match self.field_type {
            FieldType::String => Some(self.length.unwrap_or(DEFAULT_STRING_LENGTH)),
            _ => None,
        }
    }
}
