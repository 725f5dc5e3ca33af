//! Named type declarations.

use serde::Serialize;

use crate::{Literal, TypeExpr};

/// One named definition after resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    /// Sanitized, unique declaration name.
    pub name: String,
    /// Name as written in the document.
    pub raw_name: String,
    pub kind: TypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    Interface { properties: Vec<PropertyDescriptor> },
    Enum { members: Vec<Literal> },
    Alias { target: TypeExpr },
}

/// A property of an interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeDescriptor {
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface { .. })
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        match &self.kind {
            TypeKind::Interface { properties } => properties.iter().find(|p| p.name == name),
            _ => None,
        }
    }
}
