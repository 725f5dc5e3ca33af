//! Lints for operation ids.

use std::collections::HashMap;

use swagen_schema::SchemaDocument;

use super::{super::Lint, operation_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about operations whose method name will be derived.
pub struct MissingOperationIdLint;

impl Lint for MissingOperationIdLint {
    fn name(&self) -> &'static str {
        "missing-operation-id"
    }

    fn description(&self) -> &'static str {
        "Warn about operations without an operationId"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        for (path, item) in &document.paths {
            for (method, op) in item.operations() {
                let missing = op
                    .operation_id
                    .as_deref()
                    .is_none_or(|id| id.trim().is_empty());
                if missing {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "{} {} has no operationId; a method name will be derived from the path",
                                method.as_str().to_uppercase(),
                                path
                            ),
                        )
                        .at(operation_location(path, method)),
                    );
                }
            }
        }
    }
}

/// Lint that errors when two operations share an operationId.
pub struct DuplicateOperationIdLint;

impl Lint for DuplicateOperationIdLint {
    fn name(&self) -> &'static str {
        "duplicate-operation-id"
    }

    fn description(&self) -> &'static str {
        "Detect operationIds used by more than one operation"
    }

    fn check(&self, document: &SchemaDocument, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, String> = HashMap::new();

        for (path, item) in &document.paths {
            for (method, op) in item.operations() {
                let Some(id) = op.operation_id.as_deref().filter(|id| !id.trim().is_empty())
                else {
                    continue;
                };
                let location = operation_location(path, method);
                if let Some(first) = seen.get(id) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("duplicate operationId '{}' (conflicts with {})", id, first),
                        )
                        .at(location),
                    );
                } else {
                    seen.insert(id, location);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_document(content: &str) -> SchemaDocument {
        serde_json::from_str(content).expect("Failed to parse test document")
    }

    #[test]
    fn test_missing_operation_id() {
        let document = parse_document(
            r#"{ "info": {}, "paths": { "/pets": {
                "get": { "responses": {} },
                "post": { "operationId": "addPet", "responses": {} },
                "put": { "operationId": " ", "responses": {} }
            } } }"#,
        );

        let mut diagnostics = Vec::new();
        MissingOperationIdLint.check(&document, &mut diagnostics);

        let locations: Vec<_> = diagnostics.iter().filter_map(|d| d.location.as_deref()).collect();
        assert_eq!(locations, ["paths./pets.get", "paths./pets.put"]);
        assert!(diagnostics[0].message.starts_with("GET /pets"));
    }

    #[test]
    fn test_no_duplicates() {
        let document = parse_document(
            r#"{ "info": {}, "paths": {
                "/a": { "get": { "operationId": "getA", "responses": {} } },
                "/b": { "get": { "operationId": "getB", "responses": {} }, "post": { "responses": {} } }
            } }"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateOperationIdLint.check(&document, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reports_second_occurrence() {
        let document = parse_document(
            r#"{ "info": {}, "paths": {
                "/a": { "get": { "operationId": "list", "responses": {} } },
                "/b": { "get": { "operationId": "list", "responses": {} } }
            } }"#,
        );

        let mut diagnostics = Vec::new();
        DuplicateOperationIdLint.check(&document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("paths./b.get"));
        assert!(diagnostics[0].message.contains("paths./a.get"));
    }
}
