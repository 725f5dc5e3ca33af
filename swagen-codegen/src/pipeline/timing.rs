//! Phase timing through `tracing`.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use eyre::Result;

use super::{CompilationContext, Plugin};

/// Emits a `tracing` event with the duration of every phase.
#[derive(Default)]
pub struct TracingPlugin {
    started: Mutex<HashMap<String, Instant>>,
}

impl TracingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        self.started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(phase.to_string(), Instant::now());
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let started = self
            .started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(phase);
        if let Some(started) = started {
            tracing::debug!(
                phase,
                elapsed_us = started.elapsed().as_micros() as u64,
                diagnostics = ctx.diagnostics.len(),
                "phase finished"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_time_is_consumed() {
        let plugin = TracingPlugin::new();
        let mut ctx = CompilationContext::new(
            serde_json::from_str(r#"{ "info": {}, "paths": {} }"#).unwrap(),
        );

        plugin.on_before_phase("validate", &mut ctx).unwrap();
        assert_eq!(plugin.started.lock().unwrap().len(), 1);
        plugin.on_after_phase("validate", &mut ctx).unwrap();
        assert!(plugin.started.lock().unwrap().is_empty());
    }
}
