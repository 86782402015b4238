//! Language-agnostic type system for code generation.
//!
//! Types are represented semantically and rendered per target language
//! through the [`TypeMapper`] trait.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive value type (never null).
    Primitive(PrimitiveType),
    /// A nullable type.
    Optional(Box<TypeRef>),
    /// An ordered sequence of values.
    Array(Box<TypeRef>),
    /// A named type, usually fully qualified.
    Named(String),
    /// No value.
    Unit,
}

impl TypeRef {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn unit() -> Self {
        Self::Unit
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: 32-bit integer type.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: 64-bit integer type.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: Bool type.
    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Get the inner type for wrapper types (Optional, Array).
    pub fn inner_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Optional(inner) | Self::Array(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Primitive types supported by the program model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    Float,
    Double,
    Bool,
    /// A point in time.
    DateTime,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::DateTime => "datetime",
        }
    }
}

/// Visibility/access level for classes and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Methods take `&mut self` so implementations can record the imports a
/// rendered type needs.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&mut self, ty: PrimitiveType) -> String;

    /// Map a nullable type. Defaults to the inner type unchanged.
    fn map_optional(&mut self, inner: &TypeRef) -> String {
        self.render_type(inner)
    }

    /// Map a sequence type given its rendered element type.
    fn map_array(&mut self, inner: &str) -> String;

    /// Map a named type.
    fn map_named(&mut self, name: &str) -> String {
        name.to_string()
    }

    /// Map the unit type.
    fn map_unit(&mut self) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&mut self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Optional(inner) => self.map_optional(inner),
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::Named(name) => self.map_named(name),
            TypeRef::Unit => self.map_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainMapper;

    impl TypeMapper for PlainMapper {
        fn map_primitive(&mut self, ty: PrimitiveType) -> String {
            ty.as_str().to_string()
        }

        fn map_array(&mut self, inner: &str) -> String {
            format!("[{}]", inner)
        }

        fn map_unit(&mut self) -> String {
            "unit".to_string()
        }
    }

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(TypeRef::string(), TypeRef::Primitive(PrimitiveType::String));
        assert!(TypeRef::optional(TypeRef::long()).is_optional());
        assert_eq!(
            TypeRef::array(TypeRef::int()).inner_type(),
            Some(&TypeRef::int())
        );
        assert_eq!(TypeRef::named("a.B"), TypeRef::Named("a.B".into()));
        assert!(TypeRef::unit().is_unit());
    }

    #[test]
    fn test_default_render_type() {
        let mut mapper = PlainMapper;
        assert_eq!(mapper.render_type(&TypeRef::optional(TypeRef::bool())), "bool");
        assert_eq!(mapper.render_type(&TypeRef::array(TypeRef::named("a.B"))), "[a.B]");
        assert_eq!(mapper.render_type(&TypeRef::Unit), "unit");
    }

    #[test]
    fn test_visibility() {
        assert!(Visibility::Public.is_public());
        assert!(Visibility::Private.is_private());
        assert_eq!(Visibility::default(), Visibility::Public);
    }
}
