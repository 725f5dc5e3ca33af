//! Document lints, run before anything is resolved.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    DuplicateOperationIdLint, EmptyPathsLint, MissingOperationIdLint, NonAsciiIdentifierLint,
    UnknownDialectLint, UnresolvedRefLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Runs every registered [`Lint`] and fails when any of them reported an error.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lint set.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(UnknownDialectLint)
            .with_lint(EmptyPathsLint)
            .with_lint(MissingOperationIdLint)
            .with_lint(DuplicateOperationIdLint)
            .with_lint(UnresolvedRefLint)
            .with_lint(NonAsciiIdentifierLint)
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|lint| lint.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "lint the document"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.document, &mut ctx.diagnostics);
            tracing::trace!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "{}",
                lint.description()
            );
        }

        if !ctx.has_errors() {
            return Ok(());
        }

        let listing = ctx
            .errors()
            .map(|diagnostic| format!("  {}", diagnostic))
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "Validation failed with {} error(s):\n{}",
            ctx.error_count(),
            listing
        )
    }
}
