//! Intermediate representation types for swagen.
//!
//! This crate provides the normalized model that sits between the raw API
//! description and the emitted TypeScript.
//!
//! # Architecture
//!
//! ```text
//! swagger.json → swagen-schema (parsing) → swagen-ir (resolved model) → codegen
//! ```
//!
//! Every type reference in the IR is already flattened into a [`TypeExpr`];
//! nothing here points back into the source document.

mod endpoint;
mod expr;
mod model;
mod types;

pub use endpoint::{
    ApiParameter, ApiRequestBody, ApiResponse, DEFAULT_TAG, EndpointDescriptor, FormField,
};
pub use expr::{Literal, ObjectProperty, TypeExpr, property_key};
pub use model::{ApiInfo, ApiModel};
pub use swagen_core::{HttpMethod, ParameterLocation};
pub use types::{PropertyDescriptor, TypeDescriptor, TypeKind};
