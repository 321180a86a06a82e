use std::fmt;

pub mod regex;
pub mod util;

pub use regex::{Builder, Config, Regex};
pub use util::{Captures, Input, Match, Span};

/// The pattern could not be compiled. This is the only error the crate
/// reports: once a [`Regex`] exists, searching and splitting are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSyntaxError {
    pattern: String,
    offset: Option<usize>,
    message: String,
}

impl PatternSyntaxError {
    pub(crate) fn from_syntax(pattern: &str, err: &regex_syntax::Error) -> Self {
        let (offset, message) = match err {
            regex_syntax::Error::Parse(e) => (Some(e.span().start.offset), e.kind().to_string()),
            regex_syntax::Error::Translate(e) => {
                (Some(e.span().start.offset), e.kind().to_string())
            }
            e => (None, e.to_string()),
        };
        Self {
            pattern: pattern.to_owned(),
            offset,
            message,
        }
    }

    pub(crate) fn from_build(pattern: &str, err: &regex_automata::meta::BuildError) -> Self {
        if let Some(e) = err.syntax_error() {
            return Self::from_syntax(pattern, e);
        }
        Self {
            pattern: pattern.to_owned(),
            offset: None,
            message: err.to_string(),
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Byte offset into the pattern where the problem starts, when known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Short description of the problem, without the pattern or offset.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "invalid pattern {:?} at offset {offset}: {}",
                self.pattern, self.message
            ),
            None => write!(f, "invalid pattern {:?}: {}", self.pattern, self.message),
        }
    }
}

impl core::error::Error for PatternSyntaxError {}

/// Validates `pattern` and prepares it for repeated use.
pub fn compile(pattern: &str) -> Result<Regex, PatternSyntaxError> {
    Regex::new(pattern)
}

/// The leftmost match of `regex` in `text`, if any.
pub fn search<'s>(regex: &Regex, text: &'s str) -> Option<Match<'s>> {
    regex.find(text)
}

/// Every non-overlapping match of `regex` in `text`, left to right.
pub fn find_all<'s>(regex: &Regex, text: &'s str) -> Vec<&'s str> {
    regex.find_all_str(text)
}

/// The pieces of `text` left after removing every match of `regex`.
pub fn split<'s>(regex: &Regex, text: &'s str) -> Vec<&'s str> {
    regex.split_str(text)
}
