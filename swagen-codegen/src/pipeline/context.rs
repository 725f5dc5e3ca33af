//! State threaded through the pipeline phases.

use eyre::{Result, eyre};
use swagen_ir::ApiModel;
use swagen_schema::SchemaDocument;

use super::diagnostic::{Diagnostic, Severity};

/// The document, the model once resolved, and every diagnostic raised so far.
#[derive(Debug)]
pub struct CompilationContext {
    pub document: SchemaDocument,
    /// Set by the resolve phase.
    pub model: Option<ApiModel>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: SchemaDocument) -> Self {
        Self {
            document,
            model: None,
            diagnostics: Vec::new(),
        }
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Record a progress note from `phase`.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Move the resolved model out, leaving `None` behind.
    ///
    /// # Errors
    ///
    /// Fails when the resolve phase has not run.
    pub fn take_model(&mut self) -> Result<ApiModel> {
        self.model
            .take()
            .ok_or_else(|| eyre!("API model not set - did ResolvePhase run?"))
    }
}
