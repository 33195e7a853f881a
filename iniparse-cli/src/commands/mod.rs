//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Parse an INI file and print it as JSON, YAML, or text
//! - `get`: Print one section or option value
//! - `sections`: List section names
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get;
pub mod parse;
pub mod sections;

pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use parse::ParseCommand;
pub use sections::SectionsCommand;
