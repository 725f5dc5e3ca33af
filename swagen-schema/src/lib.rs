//! Document model for Swagger 2.0 and OpenAPI 3.0 API descriptions.
//!
//! The types here mirror the raw JSON document. They are immutable once parsed
//! and carry no resolution logic beyond reference lookup; turning them into
//! endpoint and type descriptors is the job of `swagen-codegen`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod node;
mod operation;
mod parse;

pub use document::{Components, Dialect, Info, SchemaDocument, Server, ref_leaf};
pub use error::{Error, Result, SourceContext};
pub use node::{AdditionalProperties, SchemaNode, SchemaType, TypeField};
pub use operation::{
    MediaType, Operation, Parameter, ParameterOrRef, PathItem, Reference, RequestBody, Response,
};
pub use parse::parse_document;
pub use swagen_core::{HttpMethod, ParameterLocation};
