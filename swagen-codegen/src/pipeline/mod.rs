//! From a parsed document to a resolved [`ApiModel`](swagen_ir::ApiModel).
//!
//! A [`Pipeline`] lints the document, resolves it, then runs any extra
//! [`Phase`]s. [`Plugin`]s observe each phase and every phase reports into
//! the shared [`CompilationContext`].
//!
//! ```ignore
//! let mut ctx = Pipeline::new(TS_NAMING).run(document)?;
//! for warning in ctx.warnings() {
//!     eprintln!("warning: {}", warning.message);
//! }
//! let model = ctx.take_model()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;
mod timing;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
pub use timing::TracingPlugin;
