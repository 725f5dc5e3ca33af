use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_document};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ValidateCommand {
    /// Path or http(s) URL of the Swagger/OpenAPI JSON document
    #[arg(short, long)]
    pub input: String,
}

impl ValidateCommand {
    /// Run the validate command
    pub fn run(&self) -> Result<()> {
        let document = load_document(&self.input)?;
        let dialect = document.require_dialect().unwrap_or_exit();

        let report = ops::validate(document, dialect, &self.input);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
