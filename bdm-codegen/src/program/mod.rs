//! The generated program representation.
//!
//! A [`Program`] is built fresh from a model on every run:
//! - [`map_field_type`] - field type to target type and metadata tags
//! - [`EntityBuilder`] - one class per business object
//! - [`build_signature`] - DAO method signature for a declared query
//! - [`DaoBuilder`] - one DAO interface per business object

mod dao;
mod entity;
mod query;
mod type_mapper;

use indexmap::IndexMap;

pub use dao::{DAO_SUFFIX, DaoBuilder};
pub(crate) use entity::validate_qualified_name;
pub use entity::{
    ENTITY_MARKER, EntityBuilder, PERSISTENCE_ID, PERSISTENCE_VERSION, RESERVED_SIMPLE_NAMES,
    getter_name, setter_name,
};
pub use query::{MAX_RESULTS, START_INDEX, Signature, build_signature};
pub use type_mapper::{FieldMapping, map_field_type};

use crate::{
    builder::ClassSpec,
    error::{Error, Result},
};

/// Which flavor of classes to build from a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Persistence tags and the persistable-entity marker.
    #[default]
    Server,
    /// Plain classes with the same members and no persistence metadata.
    Client,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered map from fully-qualified type name to class node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    classes: IndexMap<String, ClassSpec>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, rejecting a second class with the same qualified name.
    pub fn insert(&mut self, class: ClassSpec) -> Result<()> {
        if self.classes.contains_key(&class.qualified_name) {
            return Err(Error::DuplicateClass {
                name: class.qualified_name,
            });
        }
        self.classes.insert(class.qualified_name.clone(), class);
        Ok(())
    }

    pub fn get(&self, qualified_name: &str) -> Option<&ClassSpec> {
        self.classes.get(qualified_name)
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassSpec> {
        self.classes.values()
    }

    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
