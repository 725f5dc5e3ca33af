//! The phase trait.

use eyre::Result;

use super::CompilationContext;

/// A step of the pipeline.
///
/// Phases share one [`CompilationContext`]. A phase that returns `Err`
/// stops the pipeline; recoverable problems belong in
/// [`CompilationContext::diagnostics`] instead.
pub trait Phase: Send + Sync {
    /// Short name passed to plugin hooks and used for snapshot file names.
    fn name(&self) -> &'static str;

    /// One line logged at debug level when the phase starts.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
