//! Command to look up a section or a single option.

use crate::error::CliError;
use crate::utils::{load_configuration, load_parser_options, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Print one section, or one option value, from an INI file.
#[derive(Args)]
pub struct GetCommand {
    /// INI file to read (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Section name
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Option name (prints the whole section if omitted)
    #[arg(value_name = "OPTION")]
    pub option: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = load_parser_options(global)?;
        let config = load_configuration(Some(&self.file), options)?;

        let section = config.get(&self.section).ok_or_else(|| {
            CliError::SemanticFailure(format!("Section '{}' not found", self.section))
        })?;

        let Some(ref option) = self.option else {
            if self.json {
                println!("{}", to_json(section)?);
            } else {
                for (name, value) in section.iter() {
                    println!("{name} = {value}");
                }
            }
            return Ok(());
        };

        let value = section.get(option).ok_or_else(|| {
            CliError::SemanticFailure(format!(
                "Option '{option}' not found in section '{}'",
                self.section
            ))
        })?;

        if self.json {
            println!("{}", to_json(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string(value).map_err(|e| {
        CliError::Library(iniparse::Error::Serialization {
            format: "json".to_string(),
            message: e.to_string(),
        })
    })
}
