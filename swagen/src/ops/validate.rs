//! Validate operation - document checks without generation.

use swagen_codegen::pipeline::{CompilationContext, Phase, Severity, phases::ValidatePhase};
use swagen_schema::{Dialect, SchemaDocument};

use crate::reports::{ValidateReport, with_location};

/// Run every lint over the document and summarize it.
///
/// Lint errors are reported rather than returned, so all of them are shown
/// at once.
pub fn validate(document: SchemaDocument, dialect: Dialect, input: &str) -> ValidateReport {
    let mut ctx = CompilationContext::new(document);
    if let Err(e) = ValidatePhase::new().run(&mut ctx) {
        tracing::debug!("{}", e);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for diag in &ctx.diagnostics {
        let msg = with_location(&diag.message, diag.location.as_deref());
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => tracing::info!("{}", msg),
        }
    }

    let document = &ctx.document;
    let dialect = match document.spec_version() {
        Some(version) => format!("{} {}", dialect, version),
        None => dialect.to_string(),
    };

    ValidateReport {
        input: input.to_string(),
        dialect,
        title: document.info.title.clone(),
        version: document.info.version.clone(),
        path_count: document.paths.len(),
        operation_count: document.paths.values().map(|p| p.operations().count()).sum(),
        schema_count: document.named_schemas().len(),
        errors,
        warnings,
    }
}
