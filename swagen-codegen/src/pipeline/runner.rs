//! The pipeline driver.

use eyre::Result;
use swagen_schema::SchemaDocument;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ResolvePhase, ValidatePhase},
};
use crate::{language::NamingConvention, resolve::ReservedNames};

/// Drives a document through validate, resolve and any extra phases.
///
/// ```ignore
/// let ctx = Pipeline::new(TS_NAMING)
///     .plugin(TracingPlugin::new())
///     .run(document)?;
/// let model = ctx.model.expect("resolved");
/// ```
pub struct Pipeline {
    naming: NamingConvention,
    reserved: ReservedNames,
    extra: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// `naming` decides which identifiers the resolver escapes.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            reserved: ReservedNames::default(),
            extra: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Identifiers the resolver must leave to the emitter.
    pub fn reserve(mut self, reserved: ReservedNames) -> Self {
        self.reserved = reserved;
        self
    }

    /// Append a phase after resolve.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.extra.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase in order and hand back the final context.
    ///
    /// # Errors
    ///
    /// Stops at the first phase or plugin hook that fails. Validation fails
    /// when any lint reported an error, so no model is resolved in that case.
    pub fn run(&self, document: SchemaDocument) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document);

        self.run_phase(&ValidatePhase::new(), &mut ctx)?;
        let resolve = ResolvePhase::new(self.naming).with_reserved(self.reserved.clone());
        self.run_phase(&resolve, &mut ctx)?;
        for phase in &self.extra {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }
        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();
        tracing::debug!(phase = name, "{}", phase.description());

        for plugin in &self.plugins {
            tracing::trace!(phase = name, plugin = plugin.name(), "before");
            plugin.on_before_phase(name, ctx)?;
        }
        phase.run(ctx)?;
        for plugin in &self.plugins {
            tracing::trace!(phase = name, plugin = plugin.name(), "after");
            plugin.on_after_phase(name, ctx)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(NamingConvention::default())
    }
}
