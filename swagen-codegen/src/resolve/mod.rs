//! Schema resolution.
//!
//! The [`Resolver`] turns an immutable [`SchemaDocument`](swagen_schema::SchemaDocument)
//! into an [`ApiModel`](swagen_ir::ApiModel) in one pass. Identifier legality is
//! delegated to two [`Sanitizer`]s owned by the resolver, one for type names and
//! one for method names.

mod endpoints;
mod resolver;
mod sanitizer;
mod types;

pub use resolver::{ReservedNames, Resolver};
pub use sanitizer::{NameKind, Sanitizer};
