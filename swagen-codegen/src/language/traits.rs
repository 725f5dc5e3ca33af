//! The seam between the pipeline and a target language.

use std::path::Path;

use eyre::Result;

/// Turns a resolved [`ApiModel`](swagen_ir::ApiModel) into source files.
pub trait LanguageCodegen {
    /// Short lowercase name, e.g. `typescript`.
    fn language(&self) -> &'static str;

    /// Every output file, rendered in memory.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write every output file below `output_dir`.
    ///
    /// All files are rendered before the first write, so a rendering
    /// failure leaves `output_dir` untouched.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Paths relative to the output directory, split by outcome.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<String>,
    /// Existing files whose rules forbid overwriting.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative to the output directory.
    pub path: String,
    pub content: String,
}
