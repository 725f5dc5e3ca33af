//! Lint for names that cannot survive as identifiers.

use swagen_schema::SchemaDocument;

use super::{super::Lint, operation_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a definition name or operationId contains non-ASCII
/// characters and will be replaced by a generated identifier.
pub struct NonAsciiIdentifierLint;

impl Lint for NonAsciiIdentifierLint {
    fn name(&self) -> &'static str {
        "non-ascii-identifier"
    }

    fn description(&self) -> &'static str {
        "Warn about names that will be replaced by generated identifiers"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        for name in document.named_schemas().keys() {
            if !name.is_ascii() {
                diagnostics.push(Diagnostic::warning(
                    "validate",
                    format!(
                        "definition '{}' is not an ASCII name; a generated type name will be used",
                        name
                    ),
                ));
            }
        }

        for (path, item) in &document.paths {
            for (method, op) in item.operations() {
                if let Some(id) = op.operation_id.as_deref()
                    && !id.is_ascii()
                {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "operationId '{}' is not an ASCII name; a generated method name will be used",
                                id
                            ),
                        )
                        .at(operation_location(path, method)),
                    );
                }
            }
        }
    }
}
