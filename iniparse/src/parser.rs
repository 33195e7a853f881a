//! Line-oriented INI parser.
//!
//! The parser makes a single pass over its input. Each line has comments
//! stripped, is trimmed, and is then matched against the section header and
//! option patterns. Anything that matches neither, and options that appear
//! before the first section header, is skipped silently: the grammar is
//! permissive, and the only error a parse can report is a missing or
//! unreadable source.
//!
//! # Examples
//!
//! ```
//! use iniparse::{Parser, ParserOptions, Value};
//!
//! let parser = Parser::new(ParserOptions::default()).unwrap();
//! let config = parser.parse_lines(["[A]", "x = 1", "[A]", "y = 2 # note"]);
//!
//! let section = config.get("A").unwrap();
//! assert_eq!(section.get("x"), Some(&Value::Integer(1)));
//! assert_eq!(section.get("y"), Some(&Value::Integer(2)));
//! ```
//!
//! A source can also be attached up front and parsed later:
//!
//! ```
//! use iniparse::{Parser, ParserOptions};
//!
//! let text = "[server]\nhost = example.org\n";
//! let mut parser = Parser::new(ParserOptions::default())
//!     .unwrap()
//!     .with_source(text.as_bytes());
//!
//! let config = parser.parse().unwrap();
//! assert_eq!(config.len(), 1);
//!
//! // The attached source is consumed by the first parse
//! assert!(parser.parse().unwrap_err().is_no_source());
//! ```

use std::fmt;
use std::io::BufRead;

use regex::Regex;

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::options::ParserOptions;
use crate::value::{convert, Value};

/// Patterns compiled from a set of parser options.
#[derive(Debug, Clone)]
struct LinePatterns {
    section: Regex,
    option: Regex,
    comment: Option<Regex>,
}

impl LinePatterns {
    fn compile(options: &ParserOptions) -> Result<Self> {
        let section = Regex::new(r"^\[([^\]]+)\]$")?;

        let delimiters = alternation(&options.delimiters);
        let option = Regex::new(&format!(r"^(.*?)\s*(?:{delimiters})\s*(.*)$"))?;

        let comment = if options.comment_prefixes.is_empty() {
            None
        } else {
            Some(Regex::new(&alternation(&options.comment_prefixes))?)
        };

        Ok(Self {
            section,
            option,
            comment,
        })
    }
}

fn alternation(literals: &[String]) -> String {
    literals
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|")
}

/// What a single input line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// `[name]`
    Section(&'a str),
    /// `name = value`; the value is trimmed and may be empty.
    Option { name: &'a str, value: &'a str },
    /// Blank, comment, or unrecognised text.
    Skip,
}

/// INI parser bound to a fixed set of options.
///
/// A parser can be reused for any number of calls to
/// [`parse_lines`](Self::parse_lines), [`parse_str`](Self::parse_str) and
/// [`parse_reader`](Self::parse_reader). Each call builds a fresh
/// [`Configuration`]; nothing is shared between calls.
pub struct Parser<'src> {
    options: ParserOptions,
    patterns: LinePatterns,
    source: Option<Box<dyn BufRead + 'src>>,
}

impl fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl<'src> Parser<'src> {
    /// Creates a parser after validating the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the options are invalid, or
    /// [`Error::Pattern`] if the line patterns cannot be compiled.
    pub fn new(options: ParserOptions) -> Result<Self> {
        options.validate()?;
        let patterns = LinePatterns::compile(&options)?;
        Ok(Self {
            options,
            patterns,
            source: None,
        })
    }

    /// Attaches a line source to be read by [`parse`](Self::parse).
    ///
    /// Passing `&mut reader` leaves the reader owned by the caller.
    #[must_use]
    pub fn with_source<R: BufRead + 'src>(mut self, source: R) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the options this parser was built with.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns `true` if a source is attached and not yet consumed.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Parses the attached source, consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSource`] if no source is attached, or
    /// [`Error::Io`] if reading fails.
    pub fn parse(&mut self) -> Result<Configuration> {
        self.parse_from(None)
    }

    /// Parses `source` if given, otherwise the attached source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSource`] before reading anything if neither source
    /// is available, or [`Error::Io`] if reading fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use iniparse::{Parser, ParserOptions};
    ///
    /// let mut parser = Parser::new(ParserOptions::default()).unwrap();
    /// assert!(parser.parse_from(None).unwrap_err().is_no_source());
    ///
    /// let mut input: &[u8] = b"[a]\nb = c\n";
    /// let config = parser.parse_from(Some(&mut input)).unwrap();
    /// assert!(config.contains_section("a"));
    /// ```
    pub fn parse_from(&mut self, source: Option<&mut dyn BufRead>) -> Result<Configuration> {
        if let Some(reader) = source {
            return self.parse_reader(reader);
        }

        let mut attached = self.source.take().ok_or(Error::NoSource)?;
        self.parse_reader(&mut attached)
    }

    /// Parses every line of `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a line cannot be read; no partial
    /// configuration is returned in that case.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Configuration> {
        let mut scan = Scan::new(self);
        for line in reader.lines() {
            scan.feed(&line?);
        }
        Ok(scan.finish())
    }

    /// Parses a sequence of lines. Trailing newlines are allowed.
    #[must_use]
    pub fn parse_lines<I, S>(&self, lines: I) -> Configuration
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scan = Scan::new(self);
        for line in lines {
            scan.feed(line.as_ref());
        }
        scan.finish()
    }

    /// Parses a block of text.
    #[must_use]
    pub fn parse_str(&self, text: &str) -> Configuration {
        self.parse_lines(text.lines())
    }

    fn classify<'a>(&self, raw: &'a str) -> Line<'a> {
        let line = self.strip_comment(raw).trim();

        if !self.options.inline_comments
            && self
                .options
                .comment_prefixes
                .iter()
                .any(|p| line.starts_with(p.as_str()))
        {
            return Line::Skip;
        }

        if let Some(caps) = self.patterns.section.captures(line) {
            if let Some(name) = caps.get(1) {
                return Line::Section(name.as_str());
            }
        }

        if let Some(caps) = self.patterns.option.captures(line) {
            if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                return Line::Option {
                    name: name.as_str(),
                    value: value.as_str().trim(),
                };
            }
        }

        Line::Skip
    }

    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        if !self.options.inline_comments {
            return line;
        }

        match self.patterns.comment.as_ref().and_then(|re| re.find(line)) {
            Some(m) => &line[..m.start()],
            None => line,
        }
    }

    fn value_for(&self, raw: &str) -> Value {
        if raw.is_empty() {
            self.options.default_value.clone()
        } else if self.options.infer_types {
            convert(raw)
        } else {
            Value::String(raw.to_string())
        }
    }
}

/// State threaded through one pass over the input.
struct Scan<'p, 'src> {
    parser: &'p Parser<'src>,
    config: Configuration,
    current: Option<String>,
    line_no: usize,
}

impl<'p, 'src> Scan<'p, 'src> {
    fn new(parser: &'p Parser<'src>) -> Self {
        Self {
            parser,
            config: Configuration::default(),
            current: None,
            line_no: 0,
        }
    }

    fn feed(&mut self, raw: &str) {
        self.line_no += 1;

        match self.parser.classify(raw) {
            Line::Section(name) => {
                self.config.section_mut(name);
                self.current = Some(name.to_string());
            }
            Line::Option { name, value } => match self.current.as_deref() {
                Some(section) => {
                    let value = self.parser.value_for(value);
                    self.config.section_mut(section).insert(name, value);
                }
                None => {
                    log::trace!("line {}: option '{name}' before any section, skipped", self.line_no);
                }
            },
            Line::Skip => {
                log::trace!("line {}: skipped", self.line_no);
            }
        }
    }

    fn finish(self) -> Configuration {
        log::debug!(
            "parsed {} section(s) from {} line(s)",
            self.config.len(),
            self.line_no
        );
        self.config
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
