//! Java implementation of ClassRenderer for program class nodes.

use bdm_codegen::builder::{
    ClassRenderer, ClassSpec, CodeFragment, FieldSpec, MetadataTag, MethodBody, MethodSpec,
    TypeMapper, Visibility,
};

use crate::{
    annotations::render_annotation,
    imports::ImportResolver,
    java_file::{Import, JavaFile},
    type_mapper::JavaTypeMapper,
};

const OBJECTS: &str = "java.util.Objects";

/// Renders class and interface nodes to complete Java compilation units.
///
/// Import resolution is per file: every call to
/// [`render_class`](ClassRenderer::render_class) starts from a fresh resolver.
#[derive(Debug, Clone, Default)]
pub struct JavaClassRenderer {
    types: JavaTypeMapper,
}

impl JavaClassRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_field(&mut self, field: &FieldSpec) -> Vec<CodeFragment> {
        let mut fragments = self.render_tags(&field.tags);
        let ty = self.types.render_type(&field.ty);
        fragments.push(CodeFragment::line(format!(
            "{} {} {};",
            self.render_visibility(field.visibility),
            ty,
            field.name
        )));
        fragments
    }

    fn render_method(&mut self, class: &ClassSpec, method: &MethodSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &method.doc {
            fragments.push(CodeFragment::javadoc(doc));
        }
        fragments.extend(self.render_tags(&method.tags));

        let return_type = self.types.render_type(&method.return_type);
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("{} {}", self.types.render_type(&p.ty), p.name))
            .collect();
        let signature = format!(
            "{} {} {}({})",
            self.render_visibility(method.visibility),
            return_type,
            method.name,
            params.join(", ")
        );

        match &method.body {
            MethodBody::Abstract => fragments.push(CodeFragment::line(format!("{signature};"))),
            body => {
                let statements = self.render_body(class, body);
                fragments.push(CodeFragment::block(
                    format!("{signature} {{"),
                    statements,
                    Some("}".to_string()),
                ));
            }
        }
        fragments
    }

    fn render_body(&mut self, class: &ClassSpec, body: &MethodBody) -> Vec<CodeFragment> {
        match body {
            MethodBody::Abstract => Vec::new(),
            MethodBody::Getter { field } => vec![CodeFragment::line(format!("return {field};"))],
            MethodBody::Setter { field, param } => {
                vec![CodeFragment::line(format!("this.{field} = {param};"))]
            }
            MethodBody::Equals { fields } => self.render_equals(class.simple_name(), fields),
            MethodBody::HashCode { fields } => {
                let objects = self.types.resolve(OBJECTS);
                vec![CodeFragment::line(format!(
                    "return {objects}.hash({});",
                    fields.join(", ")
                ))]
            }
        }
    }

    fn render_equals(&mut self, simple_name: &str, fields: &[String]) -> Vec<CodeFragment> {
        let mut statements = vec![
            CodeFragment::block(
                "if (this == obj) {",
                vec![CodeFragment::line("return true;")],
                Some("}".to_string()),
            ),
            CodeFragment::block(
                "if (obj == null || getClass() != obj.getClass()) {",
                vec![CodeFragment::line("return false;")],
                Some("}".to_string()),
            ),
        ];

        if fields.is_empty() {
            statements.push(CodeFragment::line("return true;"));
            return statements;
        }

        let objects = self.types.resolve(OBJECTS);
        statements.push(CodeFragment::line(format!(
            "{simple_name} other = ({simple_name}) obj;"
        )));

        let comparisons: Vec<String> = fields
            .iter()
            .map(|f| format!("{objects}.equals(this.{f}, other.{f})"))
            .collect();
        let (first, rest) = comparisons.split_at(1);
        if rest.is_empty() {
            statements.push(CodeFragment::line(format!("return {};", first[0])));
            return statements;
        }

        statements.push(CodeFragment::line(format!("return {}", first[0])));
        let last = rest.len() - 1;
        let continued = rest
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let end = if i == last { ";" } else { "" };
                CodeFragment::line(format!("&& {c}{end}"))
            })
            .collect();
        statements.push(CodeFragment::indent(vec![CodeFragment::indent(continued)]));
        statements
    }

    fn render_tags(&mut self, tags: &[MetadataTag]) -> Vec<CodeFragment> {
        tags.iter()
            .flat_map(|tag| self.render_tag(tag))
            .map(CodeFragment::line)
            .collect()
    }
}

impl ClassRenderer for JavaClassRenderer {
    fn render_class(&mut self, spec: &ClassSpec) -> String {
        self.types = JavaTypeMapper::new(ImportResolver::new(&spec.qualified_name));

        // Class tags claim their simple names before capability markers.
        let mut header = Vec::new();
        if let Some(doc) = &spec.doc {
            header.push(CodeFragment::javadoc(doc));
        }
        header.extend(self.render_tags(&spec.tags));

        let keyword = if spec.is_interface() {
            "interface"
        } else {
            "class"
        };
        let mut declaration = format!(
            "{} {} {}",
            self.render_visibility(spec.visibility),
            keyword,
            spec.simple_name()
        );
        if !spec.implements.is_empty() {
            let markers: Vec<String> = spec
                .implements
                .iter()
                .map(|m| self.types.resolve(m))
                .collect();
            let clause = if spec.is_interface() {
                "extends"
            } else {
                "implements"
            };
            declaration.push_str(&format!(" {clause} {}", markers.join(", ")));
        }

        let mut members = Vec::new();
        for field in &spec.fields {
            members.push(CodeFragment::blank());
            members.extend(self.render_field(field));
        }
        for method in &spec.methods {
            members.push(CodeFragment::blank());
            members.extend(self.render_method(spec, method));
        }
        header.push(CodeFragment::block(
            format!("{declaration} {{"),
            members,
            Some("}".to_string()),
        ));

        JavaFile::new(spec.package())
            .imports(self.types.imports().into_iter().map(Import::new))
            .fragments(header)
            .render()
    }

    fn render_tag(&mut self, tag: &MetadataTag) -> Vec<String> {
        render_annotation(&mut self.types, tag)
    }

    fn render_visibility(&self, vis: Visibility) -> &'static str {
        match vis {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use bdm_codegen::builder::{MethodSpec, ParamSpec, PrimitiveType, TagKind, TypeRef};

    use super::*;

    #[test]
    fn test_render_interface() {
        let spec = ClassSpec::interface("org.acme.InvoiceDAO").method(
            MethodSpec::new("findByNumber")
                .param(ParamSpec::new("number", TypeRef::named("java.lang.String")))
                .returns(TypeRef::named("org.acme.Invoice")),
        );

        let code = JavaClassRenderer::new().render_class(&spec);
        assert_eq!(
            code,
            "package org.acme;\n\
             \n\
             public interface InvoiceDAO {\n\
             \n\
             \x20   public Invoice findByNumber(String number);\n\
             }\n"
        );
    }

    #[test]
    fn test_render_accessors() {
        let spec = ClassSpec::class("org.acme.Invoice")
            .field(FieldSpec::new(
                "issued",
                TypeRef::optional(TypeRef::primitive(PrimitiveType::DateTime)),
            ))
            .method(
                MethodSpec::new("setIssued")
                    .param(ParamSpec::new(
                        "issued",
                        TypeRef::optional(TypeRef::primitive(PrimitiveType::DateTime)),
                    ))
                    .body(MethodBody::Setter {
                        field: "issued".into(),
                        param: "issued".into(),
                    }),
            );

        let code = JavaClassRenderer::new().render_class(&spec);
        assert!(code.contains("import java.util.Date;\n"));
        assert!(code.contains("    private Date issued;\n"));
        assert!(code.contains(
            "    public void setIssued(Date issued) {\n        this.issued = issued;\n    }\n"
        ));
    }

    #[test]
    fn test_render_equals_continuation_lines() {
        let spec = ClassSpec::class("org.acme.Invoice").method(
            MethodSpec::new("equals")
                .param(ParamSpec::new("obj", TypeRef::named("java.lang.Object")))
                .returns(TypeRef::bool())
                .tag(MetadataTag::new(TagKind::Override))
                .body(MethodBody::Equals {
                    fields: vec!["number".into(), "persistenceId".into()],
                }),
        );

        let code = JavaClassRenderer::new().render_class(&spec);
        assert!(code.contains("import java.util.Objects;\n"));
        assert!(code.contains(
            "    @Override\n    public boolean equals(Object obj) {\n        if (this == obj) {\n"
        ));
        assert!(code.contains("        Invoice other = (Invoice) obj;\n"));
        assert!(code.contains(
            "        return Objects.equals(this.number, other.number)\n                && Objects.equals(this.persistenceId, other.persistenceId);\n"
        ));
    }

    #[test]
    fn test_render_equals_single_field() {
        let spec = ClassSpec::class("org.acme.Invoice").method(
            MethodSpec::new("equals")
                .param(ParamSpec::new("obj", TypeRef::named("java.lang.Object")))
                .returns(TypeRef::bool())
                .body(MethodBody::Equals {
                    fields: vec!["persistenceId".into()],
                }),
        );

        let code = JavaClassRenderer::new().render_class(&spec);
        assert!(
            code.contains("        return Objects.equals(this.persistenceId, other.persistenceId);\n")
        );
    }

    #[test]
    fn test_render_equals_fields_named_like_locals() {
        let spec = ClassSpec::class("org.acme.Pair").method(
            MethodSpec::new("equals")
                .param(ParamSpec::new("obj", TypeRef::named("java.lang.Object")))
                .returns(TypeRef::bool())
                .body(MethodBody::Equals {
                    fields: vec!["other".into(), "obj".into()],
                }),
        );

        let code = JavaClassRenderer::new().render_class(&spec);
        assert!(code.contains(
            "        return Objects.equals(this.other, other.other)\n                && Objects.equals(this.obj, other.obj);\n"
        ));
    }

    #[test]
    fn test_marker_clashing_with_annotation_stays_qualified() {
        let spec = ClassSpec::class("org.acme.Invoice")
            .tag(MetadataTag::new(TagKind::Entity).str_attr("name", "Invoice"))
            .implements("com.bonitasoft.engine.bdm.Entity");

        let code = JavaClassRenderer::new().render_class(&spec);
        assert!(code.contains("import javax.persistence.Entity;\n"));
        assert!(code.contains(
            "@Entity(name = \"Invoice\")\npublic class Invoice implements com.bonitasoft.engine.bdm.Entity {\n"
        ));
    }

    #[test]
    fn test_resolver_reset_between_classes() {
        let mut renderer = JavaClassRenderer::new();
        let dated = ClassSpec::class("org.acme.Invoice").field(FieldSpec::new(
            "issued",
            TypeRef::named("java.util.Date"),
        ));
        renderer.render_class(&dated);

        let code = renderer.render_class(&ClassSpec::class("org.acme.Customer"));
        assert!(!code.contains("import"));
    }
}
