//! Parsed configuration structure.
//!
//! A [`Configuration`] maps section names to [`Section`]s, and a section maps
//! option names to [`Value`]s. Both levels keep insertion order so output is
//! deterministic and follows the source file.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::Value;

/// A named group of options.
///
/// # Examples
///
/// ```
/// use iniparse::{Section, Value};
///
/// let mut section = Section::default();
/// section.insert("port", Value::Integer(8080));
/// assert_eq!(section.get("port"), Some(&Value::Integer(8080)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    options: IndexMap<String, Value>,
}

impl Section {
    /// Stores a value, replacing any earlier value for the same option.
    ///
    /// A replaced option keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.options.insert(name.into(), value);
    }

    /// Returns the value of an option.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Returns `true` if the section contains the option.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Iterates over options in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the option names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the section has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The result of parsing one source.
///
/// Repeated section headers share a single [`Section`], so options from every
/// occurrence accumulate under one name.
///
/// # Examples
///
/// ```
/// use iniparse::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions::default()).unwrap();
/// let config = parser.parse_str("[server]\nport = 8080\n");
///
/// assert_eq!(config.get_value("server", "port"), Some(&Value::Integer(8080)));
/// assert_eq!(config.section_names().collect::<Vec<_>>(), vec!["server"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    sections: IndexMap<String, Section>,
}

impl Configuration {
    /// Returns the section with the given name, creating it if needed.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Returns a section by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns the value of an option within a section.
    #[must_use]
    pub fn get_value(&self, section: &str, option: &str) -> Option<&Value> {
        self.sections.get(section).and_then(|s| s.get(option))
    }

    /// Returns `true` if the section exists.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the section names in the order they first appeared.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterates over sections in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no section was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Projects the configuration into a caller-defined record type.
    ///
    /// The root type needs one field per section and each section type one
    /// field per option, named as in the source. Values convert through
    /// serde, so an integer option can fill an `f64` field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Projection`](crate::Error::Projection) if the
    /// configuration does not fit the requested type.
    ///
    /// # Examples
    ///
    /// ```
    /// use iniparse::{Parser, ParserOptions};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// #[derive(Deserialize)]
    /// struct AppConfig {
    ///     server: Server,
    /// }
    ///
    /// let parser = Parser::new(ParserOptions::default()).unwrap();
    /// let config = parser.parse_str("[server]\nhost = localhost\nport = 8080\n");
    /// let record: AppConfig = config.to_record().unwrap();
    ///
    /// assert_eq!(record.server.host, "localhost");
    /// assert_eq!(record.server.port, 8080);
    /// ```
    pub fn to_record<T: DeserializeOwned>(&self) -> Result<T> {
        let tree = serde_json::to_value(self)?;
        Ok(serde_json::from_value(tree)?)
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
