//! Java type mapper implementation.

use bdm_codegen::builder::{PrimitiveType, TypeMapper, TypeRef};

use crate::imports::ImportResolver;

/// Maps language-agnostic `TypeRef`s to Java type syntax.
///
/// Every type it renders goes through the file's [`ImportResolver`], so the
/// imports a file needs are known once its members are rendered.
#[derive(Debug, Clone, Default)]
pub struct JavaTypeMapper {
    resolver: ImportResolver,
}

impl JavaTypeMapper {
    pub fn new(resolver: ImportResolver) -> Self {
        Self { resolver }
    }

    pub fn resolve(&mut self, qualified_name: &str) -> String {
        self.resolver.resolve(qualified_name)
    }

    pub fn imports(&self) -> Vec<String> {
        self.resolver.imports()
    }

    fn boxed(&mut self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::Int => self.resolve("java.lang.Integer"),
            PrimitiveType::Long => self.resolve("java.lang.Long"),
            PrimitiveType::Float => self.resolve("java.lang.Float"),
            PrimitiveType::Double => self.resolve("java.lang.Double"),
            PrimitiveType::Bool => self.resolve("java.lang.Boolean"),
            PrimitiveType::String | PrimitiveType::DateTime => self.map_primitive(ty),
        }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn map_primitive(&mut self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => self.resolve("java.lang.String"),
            PrimitiveType::Int => "int".to_string(),
            PrimitiveType::Long => "long".to_string(),
            PrimitiveType::Float => "float".to_string(),
            PrimitiveType::Double => "double".to_string(),
            PrimitiveType::Bool => "boolean".to_string(),
            PrimitiveType::DateTime => self.resolve("java.util.Date"),
        }
    }

    fn map_optional(&mut self, inner: &TypeRef) -> String {
        match inner {
            TypeRef::Primitive(p) => self.boxed(*p),
            other => self.render_type(other),
        }
    }

    fn map_array(&mut self, inner: &str) -> String {
        format!("{}<{}>", self.resolve("java.util.List"), inner)
    }

    fn map_named(&mut self, name: &str) -> String {
        self.resolve(name)
    }

    fn map_unit(&mut self) -> String {
        "void".to_string()
    }
}
