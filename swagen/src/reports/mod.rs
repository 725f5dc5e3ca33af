//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod generate;
mod output;
mod validate;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Output, Report, TerminalOutput};
pub use validate::ValidateReport;

/// Format a diagnostic message with its location on a second line.
pub fn with_location(message: &str, location: Option<&str>) -> String {
    match location {
        Some(loc) => format!("{}\n  --> {}", message, loc),
        None => message.to_string(),
    }
}
