use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, bail};
use swagen_core::{DEFAULT_CONFIG_FILE, File, FileRules, GeneratorConfig, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config template
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        write_template(&self.output)?;

        println!("Created {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("  1. Point \"input\" at your Swagger/OpenAPI document");
        println!("  2. swagen generate -c {}", self.output.display());
        Ok(())
    }
}

/// Write the config template, refusing to replace an existing file.
fn write_template(path: &Path) -> Result<()> {
    let content = GeneratorConfig::template().to_json_pretty()?;
    let file = File::new(path, content).with_rules(FileRules::create_once());

    match file.write()? {
        WriteResult::Written => Ok(()),
        WriteResult::Skipped => bail!("{} already exists", path.display()),
    }
}
