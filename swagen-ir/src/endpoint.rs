//! Endpoint descriptors.

use serde::Serialize;
use swagen_core::{HttpMethod, ParameterLocation};

use crate::TypeExpr;

/// Tag used for operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// One HTTP operation after resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDescriptor {
    /// Path template, e.g. `/users/{id}`.
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: Option<String>,
    /// Unique, legal method identifier.
    pub method_name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Non-body parameters in declaration order.
    pub parameters: Vec<ApiParameter>,
    pub request_body: Option<ApiRequestBody>,
    pub responses: Vec<ApiResponse>,
    pub tags: Vec<String>,
    pub deprecated: bool,
}

impl EndpointDescriptor {
    /// First declared tag, used for grouping.
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or(DEFAULT_TAG)
    }

    pub fn path_params(&self) -> impl Iterator<Item = &ApiParameter> {
        self.params_in(ParameterLocation::Path)
    }

    pub fn query_params(&self) -> impl Iterator<Item = &ApiParameter> {
        self.params_in(ParameterLocation::Query)
    }

    fn params_in(&self, location: ParameterLocation) -> impl Iterator<Item = &ApiParameter> {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }

    /// First response with a `2xx` status code.
    pub fn success_response(&self) -> Option<&ApiResponse> {
        self.responses.iter().find(|r| r.is_success())
    }
}

/// A non-body parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiParameter {
    /// Wire name as declared in the document.
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiRequestBody {
    /// A single serialized value passed through as-is.
    Json {
        #[serde(rename = "type")]
        ty: TypeExpr,
        required: bool,
        content_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Multipart form built field by field at call time.
    FormData {
        fields: Vec<FormField>,
        required: bool,
        content_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl ApiRequestBody {
    pub fn is_form_data(&self) -> bool {
        matches!(self, ApiRequestBody::FormData { .. })
    }

    pub fn is_required(&self) -> bool {
        match self {
            ApiRequestBody::Json { required, .. } | ApiRequestBody::FormData { required, .. } => {
                *required
            }
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ApiRequestBody::Json { description, .. }
            | ApiRequestBody::FormData { description, .. } => description.as_deref(),
        }
    }
}

/// One field of a form-encoded body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A declared response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// Status code as written (`200`, `4XX`, `default`).
    pub status_code: String,
    /// `Void` when the response carries no schema.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status_code.len() == 3 && self.status_code.starts_with('2')
    }
}
