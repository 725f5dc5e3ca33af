//! Generate operation - document to TypeScript client.

use std::path::Path;

use eyre::{Context, Result};
use swagen_codegen::pipeline::{SnapshotPlugin, TracingPlugin};
use swagen_codegen_typescript::{ClientOptions, Generator, LanguageCodegen};
use swagen_schema::SchemaDocument;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult, with_location,
};

/// Directory under the output that receives pipeline snapshots.
pub const DEBUG_DIR: &str = ".swagen/debug";

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving `types.ts`, `api.ts` and `index.ts`.
    pub output_dir: &'a Path,
    pub client: ClientOptions,
    /// Preview without writing files.
    pub dry_run: bool,
    /// Write pipeline snapshots as JSON.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless the whole pipeline succeeds and every file renders.
pub fn generate(document: SchemaDocument, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.visualize.then(|| opts.output_dir.join(DEBUG_DIR));

    let mut pipeline = opts.client.pipeline().plugin(TracingPlugin::new());
    if let Some(dir) = &debug_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline.run(document).wrap_err("Pipeline failed")?;

    let warnings = ctx
        .warnings()
        .map(|d| with_location(&d.message, d.location.as_deref()))
        .collect();

    let generator = Generator::from_context(ctx, opts.client)?;
    let model = generator.model();
    let title = model.info.title.clone();
    let version = model.info.version.clone();
    let type_count = model.types.len();
    let endpoint_count = model.endpoints.len();
    let base_url = generator.base_url().to_string();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate client")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            skipped: written.skipped,
        })
    };

    Ok(GenerateReport {
        title,
        version,
        base_url,
        warnings,
        type_count,
        endpoint_count,
        debug_dir,
        result,
    })
}
