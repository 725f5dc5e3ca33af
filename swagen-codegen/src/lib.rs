//! Schema resolution and shared code generation utilities for swagen.
//!
//! This crate turns a parsed [`SchemaDocument`](swagen_schema::SchemaDocument)
//! into the language-agnostic [`ApiModel`](swagen_ir::ApiModel) and provides the
//! building blocks used by language generators.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`pipeline`] - Compilation pipeline (validate → resolve), lints and plugins
//! - [`resolve`] - Schema resolver and identifier sanitizer

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod resolve;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
pub use resolve::{NameKind, ReservedNames, Resolver, Sanitizer};
