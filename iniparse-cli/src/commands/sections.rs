//! Command to list section names.

use crate::error::CliError;
use crate::utils::{load_configuration, load_parser_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// List the sections of an INI file in file order.
#[derive(Args)]
pub struct SectionsCommand {
    /// INI file to read (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also print the number of options in each section
    #[arg(long)]
    pub counts: bool,
}

impl SectionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = load_parser_options(global)?;
        let config = load_configuration(Some(&self.file), options)?;

        if config.is_empty() && !global.quiet {
            eprintln!("No sections found.");
            return Ok(());
        }

        for (name, section) in config.iter() {
            if self.counts {
                println!("{name}\t{}", section.len());
            } else {
                println!("{name}");
            }
        }

        Ok(())
    }
}
