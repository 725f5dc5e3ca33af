use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use swagen_codegen_typescript::ClientOptions;
use swagen_core::GeneratorConfig;

use super::load_document;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path or http(s) URL of the Swagger/OpenAPI JSON document
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output directory for the generated files
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL for the generated client (defaults to the document's server)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Prefix for every generated type name
    #[arg(short = 'p', long)]
    pub type_prefix: Option<String>,

    /// Only generate types.ts and index.ts
    #[arg(long)]
    pub no_client: bool,

    /// Read options from a config file; other flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.swagen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        tracing::debug!(input = %config.input, output = %config.output.display(), "generating");

        let document = load_document(&config.input)?;
        let report = ops::generate(
            document,
            GenerateOptions {
                output_dir: &config.output,
                client: ClientOptions::from(&config),
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge the config file (if any) with command-line flags.
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match (&self.config, &self.input, &self.output) {
            (Some(path), _, _) => GeneratorConfig::from_file(path)?,
            (None, Some(input), Some(output)) => GeneratorConfig::new(input, output),
            (None, _, _) => bail!("either --config or both --input and --output are required"),
        };

        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(prefix) = &self.type_prefix {
            config.type_prefix.clone_from(prefix);
        }
        if self.no_client {
            config.generate_client = false;
        }

        Ok(config)
    }
}
