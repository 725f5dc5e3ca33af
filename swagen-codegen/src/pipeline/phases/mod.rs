//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - runs lints over the document and collects diagnostics
//! - [`ResolvePhase`] - builds the API model from the document

mod resolve;
mod validate;

pub use resolve::ResolvePhase;
pub use validate::{
    DuplicateOperationIdLint, EmptyPathsLint, Lint, MissingOperationIdLint,
    NonAsciiIdentifierLint, UnknownDialectLint, UnresolvedRefLint, ValidatePhase,
};
