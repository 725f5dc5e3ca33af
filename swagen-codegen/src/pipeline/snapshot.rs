//! Per-phase JSON dumps of the pipeline state, behind `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use eyre::{Result, WrapErr};
use serde::Serialize;
use swagen_ir::ApiModel;

use super::{CompilationContext, Diagnostic, Plugin};

/// What the context looked like right after `phase` finished.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    /// Absent until resolve has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ApiModel>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &CompilationContext) -> Self {
        Self {
            phase: phase.to_string(),
            model: ctx.model.clone(),
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    /// Write to `<dir>/<phase>.json`, creating `dir` as needed.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create snapshot directory {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.phase));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
            .wrap_err_with(|| format!("Failed to write snapshot {}", path.display()))?;
        Ok(path)
    }
}

/// Records a [`PhaseSnapshot`] after every phase, optionally writing each
/// one to disk as it is taken.
#[derive(Default)]
pub struct SnapshotPlugin {
    taken: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(output_dir.into()),
            ..Self::default()
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);
        if let Some(dir) = &self.output_dir {
            let path = snapshot.write(dir)?;
            tracing::debug!(path = %path.display(), "wrote snapshot");
        }
        self.taken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
