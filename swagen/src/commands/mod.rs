mod generate;
mod init;
mod validate;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use swagen_schema::{SchemaDocument, parse_document};
use validate::ValidateCommand;

use crate::source::Source;

/// Extension trait for exiting on document errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for swagen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Read and parse the document behind `input`.
fn load_document(input: &str) -> Result<SchemaDocument> {
    let source = Source::new(input);
    let content = source.read()?;
    Ok(parse_document(&content, &source.to_string()).unwrap_or_exit())
}

#[derive(Parser)]
#[command(name = "swagen")]
#[command(version)]
#[command(about = "Generate TypeScript API clients from Swagger/OpenAPI documents")]
pub(crate) struct Cli {
    /// Log pipeline activity to stderr (overridden by SWAGEN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Validate(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate types.ts, api.ts and index.ts from an API description
    Generate(GenerateCommand),

    /// Write a swagen.config.json template
    Init(InitCommand),

    /// Check an API description without generating code
    Validate(ValidateCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["swagen", "validate", "-i", "api.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }
}
