//! Parser options.
//!
//! [`ParserOptions`] fixes the grammar a [`Parser`](crate::Parser) accepts:
//! which strings separate option names from values, which strings start a
//! comment, whether trailing comments are stripped, whether values are typed,
//! and what to store for options without a value.
//!
//! Options can be built in code or loaded from a YAML file:
//!
//! ```yaml
//! delimiters: ["=", ":"]
//! comment_prefixes: ["#", ";"]
//! inline_comments: true
//! infer_types: true
//! default_value: ~
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Value;

/// Default delimiter between option name and value.
pub const DEFAULT_DELIMITER: &str = "=";

/// Default comment prefix.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Grammar settings for a parser.
///
/// # Examples
///
/// ```
/// use iniparse::{ParserOptions, Value};
///
/// let options = ParserOptions::default()
///     .with_delimiters([":"])
///     .with_comment_prefixes([";"])
///     .with_default_value(Value::Boolean(false));
///
/// assert_eq!(options.delimiters, vec![":".to_string()]);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    /// Strings separating an option name from its value.
    pub delimiters: Vec<String>,

    /// Strings that start a comment.
    pub comment_prefixes: Vec<String>,

    /// Strip comments that follow content on the same line.
    pub inline_comments: bool,

    /// Convert values to integers, floats, booleans and lists.
    pub infer_types: bool,

    /// Value stored for an option with nothing after the delimiter.
    pub default_value: Value,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            delimiters: vec![DEFAULT_DELIMITER.to_string()],
            comment_prefixes: vec![DEFAULT_COMMENT_PREFIX.to_string()],
            inline_comments: true,
            infer_types: true,
            default_value: Value::Null,
        }
    }
}

impl ParserOptions {
    /// Replaces the delimiters.
    #[must_use]
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the comment prefixes.
    #[must_use]
    pub fn with_comment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables stripping of inline comments.
    #[must_use]
    pub fn with_inline_comments(mut self, enabled: bool) -> Self {
        self.inline_comments = enabled;
        self
    }

    /// Enables or disables type inference.
    #[must_use]
    pub fn with_type_inference(mut self, enabled: bool) -> Self {
        self.infer_types = enabled;
        self
    }

    /// Sets the value stored for options without a value.
    #[must_use]
    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = value;
        self
    }

    /// Checks that the options describe a usable grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if there is no delimiter, if a delimiter
    /// or comment prefix is empty, or if a string is both a delimiter and a
    /// comment prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use iniparse::ParserOptions;
    ///
    /// let options = ParserOptions::default().with_delimiters(Vec::<String>::new());
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(Error::Validation {
                field: "delimiters".to_string(),
                message: "at least one delimiter is required".to_string(),
            });
        }

        if self.delimiters.iter().any(String::is_empty) {
            return Err(Error::Validation {
                field: "delimiters".to_string(),
                message: "delimiters must not be empty strings".to_string(),
            });
        }

        if self.comment_prefixes.iter().any(String::is_empty) {
            return Err(Error::Validation {
                field: "comment_prefixes".to_string(),
                message: "comment prefixes must not be empty strings".to_string(),
            });
        }

        if let Some(shared) = self
            .delimiters
            .iter()
            .find(|d| self.comment_prefixes.contains(*d))
        {
            return Err(Error::Validation {
                field: "comment_prefixes".to_string(),
                message: format!("'{shared}' is also used as a delimiter"),
            });
        }

        Ok(())
    }
}
