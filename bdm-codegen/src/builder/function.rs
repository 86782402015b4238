//! Language-agnostic method definitions.

use super::{
    structure::{MetadataTag, TagKind},
    types::{TypeRef, Visibility},
};

/// A declarative specification for a method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub doc: Option<String>,
    pub params: Vec<ParamSpec>,
    /// Return type ([`TypeRef::Unit`] for none).
    pub return_type: TypeRef,
    pub body: MethodBody,
    pub tags: Vec<MetadataTag>,
    pub visibility: Visibility,
}

impl MethodSpec {
    /// Create a new public abstract method returning nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: TypeRef::Unit,
            body: MethodBody::Abstract,
            tags: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    pub fn body(mut self, body: MethodBody) -> Self {
        self.body = body;
        self
    }

    pub fn tag(mut self, tag: MetadataTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.iter().any(|t| t.kind == kind)
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self.body, MethodBody::Abstract)
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// What a method does, described semantically.
///
/// Renderers expand each body into the target language's statements.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodBody {
    /// No body: an interface method.
    Abstract,
    /// Return the named field.
    Getter { field: String },
    /// Store the parameter into the named field.
    Setter { field: String, param: String },
    /// Structural equality over the listed fields.
    Equals { fields: Vec<String> },
    /// Hash combining the listed fields.
    HashCode { fields: Vec<String> },
}
