#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # iniparse
//!
//! A library for parsing INI-style configuration files.
//!
//! Input is read line by line. Bracketed headers open sections, `name = value`
//! lines add options to the current section, and comments are stripped. Option
//! values are optionally typed as integers, floats, booleans or lists.
//!
//! ## Core Types
//!
//! - [`Parser`] and [`ParserOptions`]: The parsing engine and its grammar settings
//! - [`Configuration`] and [`Section`]: The parsed, insertion-ordered result
//! - [`Value`] and [`convert`]: Typed option values and type inference
//! - [`IniLoader`]: Opening files and loading option files
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use iniparse::{Parser, ParserOptions, Value};
//!
//! let text = "\
//! [server]
//! host = localhost
//! port = 8080   # default port
//!
//! [features]
//! enabled = yes
//! ratios = [0.5, 1.5]
//! ";
//!
//! let parser = Parser::new(ParserOptions::default()).unwrap();
//! let config = parser.parse_str(text);
//!
//! assert_eq!(config.get_value("server", "port"), Some(&Value::Integer(8080)));
//! assert_eq!(config.get_value("features", "enabled"), Some(&Value::Boolean(true)));
//! ```

pub mod configuration;
pub mod error;
pub mod loader;
pub mod logging;
pub mod options;
pub mod output;
pub mod parser;
pub mod value;

// Re-export key types at crate root for convenience
pub use configuration::{Configuration, Section};
pub use error::{Error, Result};
pub use loader::IniLoader;
pub use logging::{init_logger, LogLevel, Logger};
pub use options::ParserOptions;
pub use output::{OutputFormat, OutputFormatter};
pub use parser::Parser;
pub use value::{convert, Value};
