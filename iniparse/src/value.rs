//! Option values and type inference.
//!
//! Every option value is a [`Value`]. When type inference is enabled the
//! parser runs each raw token through [`convert`], which classifies it with an
//! ordered set of full-string patterns (list, boolean, float, integer) and
//! falls back to a plain string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("list pattern is valid"));

static BOOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(true|false|yes|no)$").expect("bool pattern is valid"));

static FLOAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("float pattern is valid"));

static INT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("int pattern is valid"));

/// A typed option value.
///
/// Serializes untagged, so JSON and YAML output use native scalars.
///
/// # Examples
///
/// ```
/// use iniparse::Value;
///
/// let value = iniparse::convert("[1, 2.5, true, hello]");
/// assert_eq!(
///     value,
///     Value::List(vec![
///         Value::Integer(1),
///         Value::Float(2.5),
///         Value::Boolean(true),
///         Value::String("hello".to_string()),
///     ])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Placeholder stored for options without a value, unless another default is configured.
    #[default]
    Null,
    /// `true`, `false`, `yes` or `no`, in any case.
    Boolean(bool),
    /// A run of decimal digits.
    Integer(i64),
    /// Digits, a decimal point, digits.
    Float(f64),
    /// Anything else.
    String(String),
    /// A bracketed, comma-separated list.
    List(Vec<Value>),
}

impl Value {
    /// Returns the name of this value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string contents if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as a float if this is a float or integer value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            // Debug keeps the decimal point on whole floats
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

/// Infers the type of a raw token and converts it.
///
/// The token is trimmed, then tested in order against the list, boolean,
/// float and integer patterns; the first full match wins. Anything else is
/// returned unchanged as [`Value::String`], so conversion never fails.
///
/// List elements are split on every `,` and converted recursively, so `[]`
/// holds a single empty string. Brackets inside a list are not understood,
/// so nested lists come back as strings.
///
/// # Examples
///
/// ```
/// use iniparse::{convert, Value};
///
/// assert_eq!(convert("42"), Value::Integer(42));
/// assert_eq!(convert("1.5"), Value::Float(1.5));
/// assert_eq!(convert("Yes"), Value::Boolean(true));
/// assert_eq!(convert("1."), Value::String("1.".to_string()));
/// ```
#[must_use]
pub fn convert(token: &str) -> Value {
    let token = token.trim();

    if let Some(caps) = LIST_PATTERN.captures(token) {
        return convert_list(&caps[1]);
    }

    if BOOL_PATTERN.is_match(token) {
        let lowered = token.to_ascii_lowercase();
        return Value::Boolean(lowered == "true" || lowered == "yes");
    }

    if FLOAT_PATTERN.is_match(token) {
        if let Ok(x) = token.parse::<f64>() {
            return Value::Float(x);
        }
    }

    if INT_PATTERN.is_match(token) {
        // Digit runs beyond i64 stay strings
        if let Ok(i) = token.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    Value::String(token.to_string())
}

fn convert_list(interior: &str) -> Value {
    Value::List(interior.split(',').map(convert).collect())
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
