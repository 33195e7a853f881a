//! Command to parse an INI file and print its contents.

use crate::error::CliError;
use crate::utils::{load_configuration, load_parser_options, GlobalOptions};
use clap::Args;
use iniparse::OutputFormat;
use std::path::PathBuf;

/// Parse an INI file and print the result.
#[derive(Args)]
pub struct ParseCommand {
    /// INI file to parse (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = load_parser_options(global)?;
        let config = load_configuration(self.file.as_deref(), options)?;

        log::info!("found {} section(s)", config.len());

        let output = self.format.create_formatter().format(&config)?;
        println!("{output}");
        Ok(())
    }
}
