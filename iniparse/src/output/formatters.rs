//! Output formatter implementations.

use crate::{Configuration, Error, Result};

use super::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &Configuration) -> Result<String> {
        serde_json::to_string_pretty(config).map_err(|e| Error::Serialization {
            format: "json".to_string(),
            message: e.to_string(),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, config: &Configuration) -> Result<String> {
        let yaml = serde_yaml::to_string(config).map_err(|e| Error::Serialization {
            format: "yaml".to_string(),
            message: e.to_string(),
        })?;

        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, config: &Configuration) -> Result<String> {
        if config.is_empty() {
            return Ok("No sections found.".to_string());
        }

        let mut lines = Vec::new();

        for (name, section) in config.iter() {
            lines.push(format!("[{name}]"));
            for (option, value) in section.iter() {
                if value.is_null() {
                    lines.push(format!("  {option} (null)"));
                } else {
                    lines.push(format!("  {option} = {value} ({})", value.type_name()));
                }
            }
        }

        Ok(lines.join("\n"))
    }
}
