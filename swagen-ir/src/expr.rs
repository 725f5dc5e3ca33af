//! Resolved type expressions.

use std::{borrow::Cow, fmt};

use serde::Serialize;
use swagen_core::{is_identifier, single_quoted};

/// A fully resolved type.
///
/// `Any` marks shapes that are intentionally open (an object with no declared
/// properties, an array with no `items`). `Unknown` marks shapes the resolver
/// could not type at all (absent or unrecognised `type`). Both render as `any`
/// today; emitters may distinguish them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeExpr {
    String,
    Number,
    Boolean,
    /// Raw bytes (`File`).
    Binary,
    Null,
    /// No content.
    Void,
    Any,
    Unknown,
    /// Reference to a named type declaration, already sanitized.
    Named(String),
    Literal(Literal),
    Array(Box<TypeExpr>),
    /// Inline structural object type.
    Object(Vec<ObjectProperty>),
    /// Open map with string keys.
    Map(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
}

/// A literal member of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    /// Number kept in its source spelling.
    Number(String),
    Boolean(bool),
    Null,
}

/// A property of an inline object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperty {
    pub name: String,
    pub ty: TypeExpr,
    pub required: bool,
}

impl TypeExpr {
    /// Array of `inner`.
    pub fn array(inner: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(inner))
    }

    /// Union of `members`, collapsing the degenerate cases.
    pub fn union(mut members: Vec<TypeExpr>) -> Self {
        match members.len() {
            0 => TypeExpr::Unknown,
            1 => members.remove(0),
            _ => TypeExpr::Union(members),
        }
    }

    /// Intersection of `members`, collapsing the degenerate cases.
    pub fn intersection(mut members: Vec<TypeExpr>) -> Self {
        match members.len() {
            0 => TypeExpr::Unknown,
            1 => members.remove(0),
            _ => TypeExpr::Intersection(members),
        }
    }

    /// Whether the value can be appended to a `FormData` without conversion.
    pub fn is_string_like(&self) -> bool {
        match self {
            TypeExpr::String | TypeExpr::Literal(Literal::String(_)) => true,
            TypeExpr::Union(members) => members.iter().all(TypeExpr::is_string_like),
            _ => false,
        }
    }

    /// Whether the value is a number, boolean or a literal of either.
    pub fn is_scalar(&self) -> bool {
        match self {
            TypeExpr::Number | TypeExpr::Boolean => true,
            TypeExpr::Literal(Literal::Number(_) | Literal::Boolean(_)) => true,
            TypeExpr::Union(members) => members.iter().all(TypeExpr::is_scalar),
            _ => false,
        }
    }

    /// Render using TypeScript syntax, mapping every named reference through `name`.
    pub fn render_with(&self, name: &dyn Fn(&str) -> String) -> String {
        let mut out = String::new();
        self.write(&mut out, name);
        out
    }

    fn write(&self, out: &mut String, name: &dyn Fn(&str) -> String) {
        match self {
            TypeExpr::String => out.push_str("string"),
            TypeExpr::Number => out.push_str("number"),
            TypeExpr::Boolean => out.push_str("boolean"),
            TypeExpr::Binary => out.push_str("File"),
            TypeExpr::Null => out.push_str("null"),
            TypeExpr::Void => out.push_str("void"),
            TypeExpr::Any | TypeExpr::Unknown => out.push_str("any"),
            TypeExpr::Named(n) => out.push_str(&name(n)),
            TypeExpr::Literal(literal) => out.push_str(&literal.to_string()),
            TypeExpr::Array(inner) => {
                if matches!(**inner, TypeExpr::Union(_) | TypeExpr::Intersection(_)) {
                    out.push('(');
                    inner.write(out, name);
                    out.push(')');
                } else {
                    inner.write(out, name);
                }
                out.push_str("[]");
            }
            TypeExpr::Object(properties) if properties.is_empty() => out.push_str("{}"),
            TypeExpr::Object(properties) => {
                out.push_str("{ ");
                for (i, prop) in properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(&property_key(&prop.name));
                    if !prop.required {
                        out.push('?');
                    }
                    out.push_str(": ");
                    prop.ty.write(out, name);
                }
                out.push_str(" }");
            }
            TypeExpr::Map(value) => {
                out.push_str("Record<string, ");
                value.write(out, name);
                out.push('>');
            }
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    member.write(out, name);
                }
            }
            TypeExpr::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" & ");
                    }
                    if matches!(member, TypeExpr::Union(_)) {
                        out.push('(');
                        member.write(out, name);
                        out.push(')');
                    } else {
                        member.write(out, name);
                    }
                }
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&|n| n.to_string()))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(&single_quoted(s)),
            Literal::Number(n) => f.write_str(n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// A property key usable in an object type: bare when it is an identifier,
/// single-quoted otherwise.
pub fn property_key(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(single_quoted(name))
    }
}
