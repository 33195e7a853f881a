//! Build script for iniparse-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("iniparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse INI-style configuration files")
        .long_about(
            "Command-line tool for parsing INI-style configuration files into typed JSON, YAML, or text",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .help("YAML file with parser options")
                .value_name("PATH")
                .global(true)
                .env("INIPARSE_OPTIONS"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .help("Delimiter between option name and value (repeatable)")
                .value_name("STRING")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("comment-prefix")
                .long("comment-prefix")
                .help("Comment prefix (repeatable)")
                .value_name("STRING")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("no-inline-comments")
                .long("no-inline-comments")
                .help("Keep text after a comment prefix on option and section lines")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("INIPARSE_NO_INLINE_COMMENTS"),
        )
        .arg(
            Arg::new("no-infer-types")
                .long("no-infer-types")
                .help("Store every value as a string")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("INIPARSE_NO_INFER_TYPES"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .help("Value stored for options without a value (type is inferred)")
                .value_name("VALUE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Parse an INI file and print the result")
                .long_about("Parse an INI file (or stdin) and print it as JSON, YAML, or text"),
            Command::new("get")
                .about("Print one section or option value")
                .long_about("Look up a section, or a single option within it, and print it"),
            Command::new("sections")
                .about("List section names")
                .long_about("List the sections of an INI file in the order they appear"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("iniparse.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
