//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! resolving parser options from global flags and reading the input.

use crate::error::CliError;
use iniparse::{convert, Configuration, IniLoader, Parser, ParserOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// YAML file with parser options.
    pub options_file: Option<PathBuf>,

    /// Delimiters overriding the options file.
    pub delimiters: Vec<String>,

    /// Comment prefixes overriding the options file.
    pub comment_prefixes: Vec<String>,

    /// Keep inline comments as part of values.
    pub no_inline_comments: bool,

    /// Store every value as a string.
    pub no_infer_types: bool,

    /// Value stored for options without a value.
    pub default_value: Option<String>,
}

/// Resolve parser options.
///
/// Options are merged from multiple sources with precedence:
/// 1. Global flags (highest priority)
/// 2. Options file (`--options` / `INIPARSE_OPTIONS`)
/// 3. Built-in defaults (lowest priority)
///
/// A broken options file is a configuration error; options that only become
/// invalid once the flags are applied are an argument error.
pub fn load_parser_options(global: &GlobalOptions) -> Result<ParserOptions, CliError> {
    let mut options = match global.options_file {
        Some(ref path) => {
            IniLoader::load_options(path).map_err(|e| CliError::Config(e.to_string()))?
        }
        None => ParserOptions::default(),
    };

    if !global.delimiters.is_empty() {
        options = options.with_delimiters(global.delimiters.iter().cloned());
    }
    if !global.comment_prefixes.is_empty() {
        options = options.with_comment_prefixes(global.comment_prefixes.iter().cloned());
    }
    if global.no_inline_comments {
        options = options.with_inline_comments(false);
    }
    if global.no_infer_types {
        options = options.with_type_inference(false);
    }
    if let Some(ref raw) = global.default_value {
        options = options.with_default_value(convert(raw));
    }

    options
        .validate()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    Ok(options)
}

/// Parse the input named on the command line.
///
/// `-` reads standard input. Without any input the parser reports that no
/// source was given.
pub fn load_configuration(
    input: Option<&Path>,
    options: ParserOptions,
) -> Result<Configuration, CliError> {
    match input {
        Some(path) if path == Path::new(STDIN_PATH) => {
            let stdin = io::stdin();
            let mut parser = Parser::new(options)?.with_source(stdin.lock());
            Ok(parser.parse()?)
        }
        Some(path) => Ok(IniLoader::load_file(path, &options)?),
        None => {
            let mut parser = Parser::new(options)?;
            Ok(parser.parse()?)
        }
    }
}
