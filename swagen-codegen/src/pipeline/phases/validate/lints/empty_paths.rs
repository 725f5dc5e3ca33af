//! Lint for documents that describe no operations.

use swagen_schema::SchemaDocument;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when `paths` holds no operation at all.
pub struct EmptyPathsLint;

impl Lint for EmptyPathsLint {
    fn name(&self) -> &'static str {
        "empty-paths"
    }

    fn description(&self) -> &'static str {
        "Warn when the document has no operations"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        let has_operations = document
            .paths
            .values()
            .any(|item| item.operations().next().is_some());
        if !has_operations {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    "document has no operations; the client will have no methods",
                )
                .at("paths"),
            );
        }
    }
}
