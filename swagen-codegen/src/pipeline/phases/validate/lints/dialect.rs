//! Lint for documents without a recognised version marker.

use swagen_schema::{Dialect, SchemaDocument};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when neither `swagger: 2.x` nor `openapi: 3.x` is present.
pub struct UnknownDialectLint;

impl Lint for UnknownDialectLint {
    fn name(&self) -> &'static str {
        "unknown-dialect"
    }

    fn description(&self) -> &'static str {
        "Warn when the document declares no Swagger 2 or OpenAPI 3 version"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        if document.dialect() != Dialect::Unknown {
            return;
        }
        let message = match document.spec_version() {
            Some(version) => format!("unsupported document version '{}'", version),
            None => "document has no 'swagger' or 'openapi' version marker".to_string(),
        };
        diagnostics.push(Diagnostic::warning("validate", message));
    }
}
