//! Recursive schema nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A recursive type description inside the document.
///
/// Resolution order is `$ref` first, then `enum`, then the type-specific
/// fields. The node keeps every field so that later stages can pick.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Pointer to a named definition (`#/definitions/Pet`).
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    #[serde(rename = "type")]
    pub ty: Option<TypeField>,

    pub format: Option<String>,

    pub description: Option<String>,

    /// Element schema for arrays.
    pub items: Option<Box<SchemaNode>>,

    /// Object properties, in document order.
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Names of required properties.
    #[serde(default, deserialize_with = "deserialize_required")]
    pub required: Vec<String>,

    /// Literal members.
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<serde_json::Value>>,

    pub additional_properties: Option<AdditionalProperties>,

    #[serde(default)]
    pub all_of: Vec<SchemaNode>,

    #[serde(default)]
    pub one_of: Vec<SchemaNode>,

    #[serde(default)]
    pub any_of: Vec<SchemaNode>,

    #[serde(default)]
    pub nullable: bool,
}

/// The `type` keyword: a single name, or a list of names (OpenAPI 3.1).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeField {
    /// The authoritative type name: the first entry that is not `null`.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeField::Single(name) => Some(name),
            TypeField::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|n| *n != "null")
                .or_else(|| names.first().map(String::as_str)),
        }
    }
}

/// `additionalProperties`: either a flag or a value schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(Box<SchemaNode>),
}

/// Known values of the `type` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    /// Swagger 2 `type: file` (form-data uploads).
    File,
    Null,
    Other(String),
}

impl SchemaType {
    fn from_name(name: &str) -> Self {
        match name {
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "array" => SchemaType::Array,
            "object" => SchemaType::Object,
            "file" => SchemaType::File,
            "null" => SchemaType::Null,
            other => SchemaType::Other(other.to_string()),
        }
    }
}

impl SchemaNode {
    /// The declared type, if any.
    ///
    /// A node that declares `properties` without a `type` is an object.
    pub fn schema_type(&self) -> Option<SchemaType> {
        match self.ty.as_ref().and_then(TypeField::primary) {
            Some(name) => Some(SchemaType::from_name(name)),
            None if self.properties.is_some() => Some(SchemaType::Object),
            None => None,
        }
    }

    /// Whether this node describes an object with declared properties.
    pub fn is_object_with_properties(&self) -> bool {
        self.properties.is_some() && self.schema_type() == Some(SchemaType::Object)
    }

    /// Whether this node holds raw bytes (`string` + `binary`, or Swagger 2 `file`).
    pub fn is_binary(&self) -> bool {
        match self.schema_type() {
            Some(SchemaType::File) => true,
            Some(SchemaType::String) => self.format.as_deref() == Some("binary"),
            _ => false,
        }
    }

    /// Whether the property `name` is listed in `required`.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Visit this node and every node nested inside it, depth first.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a SchemaNode)) {
        f(self);
        if let Some(items) = &self.items {
            items.walk(f);
        }
        if let Some(properties) = &self.properties {
            for node in properties.values() {
                node.walk(f);
            }
        }
        if let Some(AdditionalProperties::Schema(node)) = &self.additional_properties {
            node.walk(f);
        }
        for node in self.all_of.iter().chain(&self.one_of).chain(&self.any_of) {
            node.walk(f);
        }
    }
}

/// Accept `required: [..]` as well as the stray `required: true` some
/// generators put on property schemas.
fn deserialize_required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Required {
        Names(Vec<String>),
        Flag(#[allow(dead_code)] bool),
    }

    Ok(match Required::deserialize(deserializer)? {
        Required::Names(names) => names,
        Required::Flag(_) => Vec::new(),
    })
}
