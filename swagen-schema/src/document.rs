//! The root document.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    node::SchemaNode,
    operation::{Parameter, ParameterOrRef, PathItem},
};

/// A parsed Swagger 2.0 or OpenAPI 3.0 document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// Swagger 2 version marker (`"2.0"`).
    pub swagger: Option<String>,
    /// OpenAPI 3 version marker (`"3.0.3"`).
    pub openapi: Option<String>,

    pub info: Info,

    /// Swagger 2 host, without scheme.
    pub host: Option<String>,
    /// Swagger 2 base path.
    pub base_path: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,

    /// OpenAPI 3 servers.
    #[serde(default)]
    pub servers: Vec<Server>,

    pub paths: IndexMap<String, PathItem>,

    /// Swagger 2 named schemas.
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaNode>,

    /// Swagger 2 shared parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default)]
    pub components: Components,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    pub description: Option<String>,
}

/// An OpenAPI 3 server entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

/// OpenAPI 3 reusable components.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaNode>,
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
}

/// Which specification family a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Swagger2,
    OpenApi3,
    Unknown,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Swagger2 => write!(f, "Swagger"),
            Dialect::OpenApi3 => write!(f, "OpenAPI"),
            Dialect::Unknown => write!(f, "unknown"),
        }
    }
}

impl SchemaDocument {
    /// Detect the dialect from the version marker.
    pub fn dialect(&self) -> Dialect {
        if self.openapi.as_deref().is_some_and(|v| v.starts_with('3')) {
            Dialect::OpenApi3
        } else if self.swagger.as_deref().is_some_and(|v| v.starts_with('2')) {
            Dialect::Swagger2
        } else {
            Dialect::Unknown
        }
    }

    /// The raw version marker, `openapi` taking precedence.
    pub fn spec_version(&self) -> Option<&str> {
        self.openapi.as_deref().or(self.swagger.as_deref())
    }

    /// All named schemas: Swagger 2 `definitions` followed by OpenAPI 3
    /// `components.schemas`. A name present in both keeps its first position
    /// and takes the later schema.
    pub fn named_schemas(&self) -> IndexMap<&str, &SchemaNode> {
        let mut named = IndexMap::new();
        for (name, node) in self.definitions.iter().chain(&self.components.schemas) {
            named.insert(name.as_str(), node);
        }
        named
    }

    /// Look up a named schema by `$ref` pointer.
    pub fn schema_by_ref(&self, reference: &str) -> Option<&SchemaNode> {
        if let Some(name) = reference.strip_prefix("#/definitions/") {
            return self.definitions.get(decode_pointer(name).as_str());
        }
        if let Some(name) = reference.strip_prefix("#/components/schemas/") {
            return self.components.schemas.get(decode_pointer(name).as_str());
        }
        None
    }

    /// Look up a shared parameter by `$ref` pointer.
    pub fn parameter_by_ref(&self, reference: &str) -> Option<&Parameter> {
        if let Some(name) = reference.strip_prefix("#/parameters/") {
            return self.parameters.get(decode_pointer(name).as_str());
        }
        if let Some(name) = reference.strip_prefix("#/components/parameters/") {
            return self.components.parameters.get(decode_pointer(name).as_str());
        }
        None
    }

    /// Visit every schema node in the document: named schemas, parameters,
    /// request bodies and responses.
    pub fn walk_schemas<'a>(&'a self, f: &mut impl FnMut(&'a SchemaNode)) {
        for node in self.named_schemas().into_values() {
            node.walk(f);
        }
        for param in self.parameters.values().chain(self.components.parameters.values()) {
            visit_parameter(param, f);
        }
        for item in self.paths.values() {
            for (_, op) in item.operations() {
                let inline = item.parameters.iter().chain(&op.parameters);
                for param in inline {
                    if let ParameterOrRef::Inline(param) = param {
                        visit_parameter(param, f);
                    }
                }
                if let Some(body) = &op.request_body {
                    for media in body.content.values() {
                        if let Some(schema) = &media.schema {
                            schema.walk(f);
                        }
                    }
                }
                for response in op.responses.values() {
                    if let Some(schema) = &response.schema {
                        schema.walk(f);
                    }
                    for media in response.content.iter().flat_map(|c| c.values()) {
                        if let Some(schema) = &media.schema {
                            schema.walk(f);
                        }
                    }
                }
            }
        }
    }
}

fn visit_parameter<'a>(param: &'a Parameter, f: &mut impl FnMut(&'a SchemaNode)) {
    if let Some(schema) = &param.schema {
        schema.walk(f);
    }
    if let Some(items) = &param.items {
        items.walk(f);
    }
}

/// The last segment of a `$ref` pointer, with JSON-pointer escapes decoded.
pub fn ref_leaf(reference: &str) -> String {
    let leaf = reference.rsplit('/').next().unwrap_or(reference);
    decode_pointer(leaf)
}

fn decode_pointer(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
