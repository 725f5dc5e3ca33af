//! The complete resolved model.

use serde::Serialize;

use crate::{EndpointDescriptor, TypeDescriptor};

/// Everything an emitter needs, produced in one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiModel {
    pub info: ApiInfo,
    /// Base URL derived from `servers` or `schemes`/`host`/`basePath`.
    pub base_url: String,
    pub endpoints: Vec<EndpointDescriptor>,
    pub types: Vec<TypeDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiModel {
    /// Look up a declaration by its sanitized name.
    pub fn find_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Look up an endpoint by its generated method name.
    pub fn find_endpoint(&self, method_name: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|e| e.method_name == method_name)
    }
}
