//! Main entry point for the iniparse CLI.
//!
//! This is the command-line interface for the iniparse library.
//! It provides commands for inspecting INI files:
//! - `parse`: Print the parsed file as JSON, YAML, or text
//! - `get`: Print one section or option value
//! - `sections`: List section names
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    let logger = iniparse::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        quiet: cli.quiet,
        options_file: cli.options,
        delimiters: cli.delimiters,
        comment_prefixes: cli.comment_prefixes,
        no_inline_comments: cli.no_inline_comments,
        no_infer_types: cli.no_infer_types,
        default_value: cli.default_value,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Sections(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
