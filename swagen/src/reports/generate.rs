//! What `swagen generate` prints.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct GenerateReport {
    pub title: String,
    pub version: String,
    /// The URL the generated client defaults to.
    pub base_url: String,
    /// Pipeline warnings, already formatted with their locations.
    pub warnings: Vec<String>,
    pub type_count: usize,
    pub endpoint_count: usize,
    /// Set when `--visualize` dumped phase snapshots.
    pub debug_dir: Option<PathBuf>,
    pub result: GenerationResult,
}

/// Either files on disk or, with `--dry-run`, their would-be contents.
#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Relative to `output_dir`.
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(debug_dir) = &self.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} v{}", self.title, self.version));
        out.key_value_indented("Base URL", &self.base_url);
        out.key_value_indented("Types", &self.type_count.to_string());
        out.key_value_indented("Endpoints", &self.endpoint_count.to_string());
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_summary(out);
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.written {
            out.added_item(file);
        }
        for file in &written.skipped {
            out.list_item(&format!("{} (kept)", file));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
        out.divider("Summary");
        self.render_summary(out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
