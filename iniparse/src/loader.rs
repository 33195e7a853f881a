//! File loading.
//!
//! The parser itself only consumes an already-open line source. This module
//! owns the file handle around a parse, and loads parser options from YAML.

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::options::ParserOptions;
use crate::parser::Parser;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Loads INI files and parser option files from disk.
///
/// # Examples
///
/// ```no_run
/// use iniparse::{IniLoader, ParserOptions};
/// use std::path::Path;
///
/// let config = IniLoader::load_file(Path::new("app.ini"), &ParserOptions::default()).unwrap();
/// println!("Found {} sections", config.len());
/// ```
pub struct IniLoader;

impl IniLoader {
    /// Open, parse and close an INI file.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, the file cannot be
    /// opened, or a line cannot be read.
    pub fn load_file(path: &Path, options: &ParserOptions) -> Result<Configuration> {
        let parser = Parser::new(options.clone())?;

        let file = File::open(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to open INI file: {e}"),
        })?;

        log::debug!("parsing {}", path.display());
        parser.parse_reader(BufReader::new(file))
    }

    /// Load and validate a YAML parser options file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// the options fail validation.
    pub fn load_options(path: &Path) -> Result<ParserOptions> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read options file: {e}"),
        })?;

        let options: ParserOptions =
            serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
                field: format!("{}", path.display()),
                message: format!("Invalid YAML: {e}"),
            })?;

        options.validate()?;
        Ok(options)
    }
}
