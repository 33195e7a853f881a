//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, GetCommand, ParseCommand, SectionsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting INI-style configuration files.
#[derive(Parser)]
#[command(name = "iniparse")]
#[command(version, about = "Parse INI-style configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// YAML file with parser options
    #[arg(long, value_name = "PATH", global = true, env = "INIPARSE_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Delimiter between option name and value (repeatable)
    #[arg(long = "delimiter", value_name = "STRING", global = true)]
    pub delimiters: Vec<String>,

    /// Comment prefix (repeatable)
    #[arg(long = "comment-prefix", value_name = "STRING", global = true)]
    pub comment_prefixes: Vec<String>,

    /// Keep text after a comment prefix on option and section lines
    #[arg(long, global = true, env = "INIPARSE_NO_INLINE_COMMENTS")]
    pub no_inline_comments: bool,

    /// Store every value as a string
    #[arg(long, global = true, env = "INIPARSE_NO_INFER_TYPES")]
    pub no_infer_types: bool,

    /// Value stored for options without a value (type is inferred)
    #[arg(long = "default", value_name = "VALUE", global = true)]
    pub default_value: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse an INI file and print the result
    Parse(ParseCommand),

    /// Print one section or option value
    Get(GetCommand),

    /// List section names
    Sections(SectionsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
