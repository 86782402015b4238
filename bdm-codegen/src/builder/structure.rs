//! Language-agnostic class definitions.
//!
//! Declarative specifications for classes, interfaces, their fields and the
//! metadata tags attached to them. Renderers turn these into target source.

use bdm_core::{namespace_of, simple_name_of};

use super::{
    function::MethodSpec,
    types::{TypeRef, Visibility},
};

/// Whether a class node is a concrete class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

/// A declarative specification for a class or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Fully-qualified name (`<package>.<SimpleName>`).
    pub qualified_name: String,
    pub kind: ClassKind,
    pub doc: Option<String>,
    /// Class-level metadata tags, in render order.
    pub tags: Vec<MetadataTag>,
    /// Qualified names of implemented capability markers.
    pub implements: Vec<String>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    pub visibility: Visibility,
}

impl ClassSpec {
    /// Create a new public class.
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, ClassKind::Class)
    }

    /// Create a new public interface.
    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, ClassKind::Interface)
    }

    fn new(qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            doc: None,
            tags: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn tag(mut self, tag: MetadataTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn implements(mut self, marker: impl Into<String>) -> Self {
        self.implements.push(marker.into());
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodSpec>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn package(&self) -> &str {
        namespace_of(&self.qualified_name)
    }

    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// First class-level tag of the given kind.
    pub fn find_tag(&self, kind: TagKind) -> Option<&MetadataTag> {
        self.tags.iter().find(|t| t.kind == kind)
    }

    pub fn count_tags(&self, kind: TagKind) -> usize {
        self.tags.iter().filter(|t| t.kind == kind).count()
    }

    pub fn find_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Drop every persistence tag and capability marker, keeping members.
    pub fn without_persistence(mut self) -> Self {
        self.tags.retain(|t| !t.kind.is_persistence());
        self.implements.clear();
        for field in &mut self.fields {
            field.tags.retain(|t| !t.kind.is_persistence());
        }
        for method in &mut self.methods {
            method.tags.retain(|t| !t.kind.is_persistence());
        }
        self
    }
}

/// A field (storage slot) in a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    pub tags: Vec<MetadataTag>,
    pub visibility: Visibility,
}

impl FieldSpec {
    /// Create a new private field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            tags: Vec::new(),
            visibility: Visibility::Private,
        }
    }

    pub fn tag(mut self, tag: MetadataTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = MetadataTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn find_tag(&self, kind: TagKind) -> Option<&MetadataTag> {
        self.tags.iter().find(|t| t.kind == kind)
    }

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.find_tag(kind).is_some()
    }
}

/// The kind of a metadata tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Entity,
    Table,
    Column,
    Id,
    GeneratedValue,
    Version,
    Temporal,
    Lob,
    NamedQueries,
    NamedQuery,
    UniqueConstraint,
    Override,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Table => "table",
            Self::Column => "column",
            Self::Id => "id",
            Self::GeneratedValue => "generated_value",
            Self::Version => "version",
            Self::Temporal => "temporal",
            Self::Lob => "lob",
            Self::NamedQueries => "named_queries",
            Self::NamedQuery => "named_query",
            Self::UniqueConstraint => "unique_constraint",
            Self::Override => "override",
        }
    }

    /// Whether the tag describes persistence mapping.
    pub fn is_persistence(&self) -> bool {
        !matches!(self, Self::Override)
    }
}

/// A value attached to a metadata tag attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// A constant of the enumeration associated with the tag kind.
    Enum(String),
    StrList(Vec<String>),
    Tags(Vec<MetadataTag>),
}

/// Attribute name used for a tag's single unnamed value.
pub const VALUE_ATTR: &str = "value";

/// A named, attributed annotation-like marker on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataTag {
    pub kind: TagKind,
    pub attrs: Vec<(String, TagValue)>,
}

impl MetadataTag {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
        }
    }

    /// Add an attribute, replacing any existing one with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: TagValue) -> Self {
        let name = name.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn str_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr(name, TagValue::Str(value.into()))
    }

    pub fn bool_attr(self, name: impl Into<String>, value: bool) -> Self {
        self.attr(name, TagValue::Bool(value))
    }

    pub fn int_attr(self, name: impl Into<String>, value: i64) -> Self {
        self.attr(name, TagValue::Int(value))
    }

    /// Set the tag's single unnamed value.
    pub fn value(self, value: TagValue) -> Self {
        self.attr(VALUE_ATTR, value)
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(TagValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

/// Trait for rendering class specifications to target source.
pub trait ClassRenderer {
    /// Render a complete class or interface declaration.
    fn render_class(&mut self, spec: &ClassSpec) -> String;

    /// Render one metadata tag, possibly over several lines.
    fn render_tag(&mut self, tag: &MetadataTag) -> Vec<String>;

    fn render_visibility(&self, vis: Visibility) -> &'static str;
}
