//! Lint for references that point nowhere.

use indexmap::IndexSet;
use swagen_schema::{ParameterOrRef, SchemaDocument};

use super::{super::Lint, operation_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about `$ref`s with no target in the document.
///
/// Unresolved schema references still generate code (the leaf name is used
/// as is); unresolved parameter references are dropped.
pub struct UnresolvedRefLint;

impl Lint for UnresolvedRefLint {
    fn name(&self) -> &'static str {
        "unresolved-ref"
    }

    fn description(&self) -> &'static str {
        "Warn about $ref pointers that do not resolve"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut missing: IndexSet<&str> = IndexSet::new();
        document.walk_schemas(&mut |node| {
            if let Some(reference) = &node.reference
                && document.schema_by_ref(reference).is_none()
            {
                missing.insert(reference.as_str());
            }
        });

        for reference in missing {
            diagnostics.push(Diagnostic::warning(
                "validate",
                format!(
                    "unresolved reference '{}'; the type name will be used as is",
                    reference
                ),
            ));
        }

        for (path, item) in &document.paths {
            for (method, op) in item.operations() {
                for entry in item.parameters.iter().chain(&op.parameters) {
                    if let ParameterOrRef::Ref(r) = entry
                        && document.parameter_by_ref(&r.reference).is_none()
                    {
                        diagnostics.push(
                            Diagnostic::warning(
                                "validate",
                                format!(
                                    "unresolved parameter reference '{}' is ignored",
                                    r.reference
                                ),
                            )
                            .at(operation_location(path, method)),
                        );
                    }
                }
            }
        }
    }
}
