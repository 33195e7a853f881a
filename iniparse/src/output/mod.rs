//! Output formatting for parsed configurations.
//!
//! This module renders a [`Configuration`] as JSON, YAML, or a
//! human-readable listing.

mod formatters;

use crate::{Configuration, Result};

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting a configuration into different output formats.
pub trait OutputFormatter {
    /// Format the given configuration into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    fn format(&self, config: &Configuration) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// Human-readable listing with value types.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}
