//! Java annotation rendering for metadata tags.

use bdm_codegen::builder::{MetadataTag, TagKind, TagValue, VALUE_ATTR};

use crate::type_mapper::JavaTypeMapper;

/// Qualified annotation type for a tag kind.
pub fn annotation_type(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Entity => "javax.persistence.Entity",
        TagKind::Table => "javax.persistence.Table",
        TagKind::Column => "javax.persistence.Column",
        TagKind::Id => "javax.persistence.Id",
        TagKind::GeneratedValue => "javax.persistence.GeneratedValue",
        TagKind::Version => "javax.persistence.Version",
        TagKind::Temporal => "javax.persistence.Temporal",
        TagKind::Lob => "javax.persistence.Lob",
        TagKind::NamedQueries => "javax.persistence.NamedQueries",
        TagKind::NamedQuery => "javax.persistence.NamedQuery",
        TagKind::UniqueConstraint => "javax.persistence.UniqueConstraint",
        TagKind::Override => "java.lang.Override",
    }
}

/// Enumeration whose constants a tag kind's enum values name.
fn enum_type(kind: TagKind) -> Option<&'static str> {
    match kind {
        TagKind::Temporal => Some("javax.persistence.TemporalType"),
        _ => None,
    }
}

/// Render a tag as one or more annotation lines.
///
/// Non-empty nested tag lists are laid out one element per line.
pub(crate) fn render_annotation(types: &mut JavaTypeMapper, tag: &MetadataTag) -> Vec<String> {
    let name = types.resolve(annotation_type(tag.kind));
    if tag.attrs.is_empty() {
        return vec![format!("@{name}")];
    }

    let positional = tag.attrs.len() == 1 && tag.attrs[0].0 == VALUE_ATTR;
    let mut lines = Vec::new();
    let mut current = format!("@{name}(");

    for (i, (attr, value)) in tag.attrs.iter().enumerate() {
        if i > 0 {
            current.push_str(", ");
        }
        if !positional {
            current.push_str(&to_camel_case(attr));
            current.push_str(" = ");
        }
        match value {
            TagValue::Tags(nested) if !nested.is_empty() => {
                current.push('{');
                lines.push(std::mem::take(&mut current));
                let last = nested.len() - 1;
                for (j, tag) in nested.iter().enumerate() {
                    let mut rendered = render_annotation(types, tag);
                    if j < last
                        && let Some(line) = rendered.last_mut()
                    {
                        line.push(',');
                    }
                    lines.extend(rendered.into_iter().map(|line| format!("    {line}")));
                }
                current.push('}');
            }
            other => current.push_str(&render_value(types, tag.kind, other)),
        }
    }

    current.push(')');
    lines.push(current);
    lines
}

fn render_value(types: &mut JavaTypeMapper, kind: TagKind, value: &TagValue) -> String {
    match value {
        TagValue::Str(s) => string_literal(s),
        TagValue::Bool(b) => b.to_string(),
        TagValue::Int(n) => n.to_string(),
        TagValue::Enum(constant) => match enum_type(kind) {
            Some(ty) => format!("{}.{}", types.resolve(ty), constant),
            None => constant.clone(),
        },
        TagValue::StrList(items) if items.is_empty() => "{}".to_string(),
        TagValue::StrList(items) => {
            let items: Vec<String> = items.iter().map(|s| string_literal(s)).collect();
            format!("{{ {} }}", items.join(", "))
        }
        TagValue::Tags(tags) => {
            let rendered: Vec<String> = tags
                .iter()
                .map(|t| render_annotation(types, t).join(" "))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}

/// Quote and escape a Java string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `unique_constraints` -> `uniqueConstraints`
fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper = false;
    for c in s.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
