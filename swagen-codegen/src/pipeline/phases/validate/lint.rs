//! The lint trait.

use swagen_schema::SchemaDocument;

use crate::pipeline::Diagnostic;

/// One document check run by [`ValidatePhase`](super::ValidatePhase).
///
/// A lint never fails; it reports problems by pushing diagnostics. Error
/// diagnostics stop the pipeline once every lint has run.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `duplicate-operation-id`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>);
}
