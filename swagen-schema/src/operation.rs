//! Path items, operations, parameters, bodies and responses.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;
use swagen_core::{HttpMethod, ParameterLocation};

use crate::node::{SchemaNode, TypeField};

/// The operations available on a single path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,

    /// Parameters shared by every operation on this path.
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
}

impl PathItem {
    /// Get the operation for a verb.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
        }
    }

    /// Iterate the present operations in fixed verb order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single HTTP operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub operation_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
    /// OpenAPI 3 request body.
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A `$ref` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// A parameter given inline or by reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref(Reference),
    Inline(Parameter),
}

/// An operation parameter.
///
/// Swagger 2 puts the value type inline (`type`, `format`, `items`, `enum`);
/// OpenAPI 3 and Swagger 2 body parameters use `schema`.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub schema: Option<SchemaNode>,
    #[serde(rename = "type")]
    pub ty: Option<TypeField>,
    pub format: Option<String>,
    pub items: Option<Box<SchemaNode>>,
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<serde_json::Value>>,
}

impl Parameter {
    /// The schema describing the parameter value.
    pub fn value_schema(&self) -> Cow<'_, SchemaNode> {
        match &self.schema {
            Some(schema) => Cow::Borrowed(schema),
            None => Cow::Owned(SchemaNode {
                ty: self.ty.clone(),
                format: self.format.clone(),
                items: self.items.clone(),
                enumeration: self.enumeration.clone(),
                description: self.description.clone(),
                ..SchemaNode::default()
            }),
        }
    }
}

/// OpenAPI 3 request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// The first media type entry, which decides the body shape.
    pub fn first_media(&self) -> Option<(&str, &MediaType)> {
        self.content.first().map(|(ty, media)| (ty.as_str(), media))
    }
}

/// A media type entry of a body or response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<SchemaNode>,
}

/// A response for one status code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,
    /// Swagger 2 response schema.
    pub schema: Option<SchemaNode>,
    /// OpenAPI 3 content map.
    pub content: Option<IndexMap<String, MediaType>>,
}

impl Response {
    /// The schema of this response: the OpenAPI 3 first media type if it has
    /// one, otherwise the Swagger 2 `schema`.
    pub fn body_schema(&self) -> Option<&SchemaNode> {
        self.content
            .as_ref()
            .and_then(|content| content.first())
            .and_then(|(_, media)| media.schema.as_ref())
            .or(self.schema.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_in_verb_order() {
        let item: PathItem = serde_json::from_str(
            r#"{
                "head": { "operationId": "h" },
                "delete": { "operationId": "d" },
                "get": { "operationId": "g" }
            }"#,
        )
        .unwrap();

        let ids: Vec<_> = item
            .operations()
            .map(|(method, op)| (method, op.operation_id.clone().unwrap()))
            .collect();
        assert_eq!(
            ids,
            [
                (HttpMethod::Get, "g".to_string()),
                (HttpMethod::Delete, "d".to_string()),
                (HttpMethod::Head, "h".to_string()),
            ]
        );
    }

    #[test]
    fn test_parameter_or_ref() {
        let params: Vec<ParameterOrRef> = serde_json::from_str(
            r##"[
                { "$ref": "#/parameters/limit" },
                { "name": "id", "in": "path", "required": true, "type": "integer" }
            ]"##,
        )
        .unwrap();

        assert!(matches!(&params[0], ParameterOrRef::Ref(r) if r.reference == "#/parameters/limit"));
        match &params[1] {
            ParameterOrRef::Inline(p) => {
                assert_eq!(p.name, "id");
                assert_eq!(p.location, ParameterLocation::Path);
                assert!(p.required);
            }
            other => panic!("expected inline parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_value_schema_from_inline_fields() {
        let p: Parameter = serde_json::from_str(
            r#"{ "name": "tags", "in": "query", "type": "array", "items": { "type": "string" } }"#,
        )
        .unwrap();

        let schema = p.value_schema();
        assert!(matches!(schema, Cow::Owned(_)));
        assert_eq!(schema.ty, Some(TypeField::Single("array".into())));
        assert!(schema.items.is_some());
    }

    #[test]
    fn test_response_prefers_first_media_type() {
        let r: Response = serde_json::from_str(
            r##"{
                "description": "ok",
                "content": {
                    "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } },
                    "application/xml": { "schema": { "type": "string" } }
                }
            }"##,
        )
        .unwrap();

        let schema = r.body_schema().unwrap();
        assert_eq!(schema.reference.as_deref(), Some("#/components/schemas/Pet"));
    }

    #[test]
    fn test_response_without_schema() {
        let r: Response = serde_json::from_str(r#"{ "description": "deleted" }"#).unwrap();
        assert!(r.body_schema().is_none());
    }
}
