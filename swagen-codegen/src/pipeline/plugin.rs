//! The plugin trait.

use eyre::Result;

use super::CompilationContext;

/// Observer around each phase of a [`Pipeline`](super::Pipeline).
///
/// Both hooks default to doing nothing. Returning `Err` from either hook
/// aborts the run. [`TracingPlugin`](super::TracingPlugin) and
/// [`SnapshotPlugin`](super::SnapshotPlugin) ship with the crate.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Runs only when the phase succeeded.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
