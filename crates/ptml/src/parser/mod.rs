//! Parser for PTML.
//!
//! This module contains the scanner state machine, the nesting tracker and
//! the public entry points. Parsing is all-or-nothing: either the whole input
//! is well formed, or the result is an error (strict mode) or the untouched
//! input as plain text (lenient mode).

mod nesting;
mod scanner;
mod state;

use std::fmt;
use std::str::FromStr;

use crate::error::{PtmlError, UnknownParseMode};
use crate::markup::ParsedText;

use scanner::Scanner;
pub use state::State;

/// How malformed markup is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Malformed input is returned unchanged as plain text, with no
    /// decorations.
    #[default]
    Lenient,
    /// Malformed input is reported as a [`PtmlError`].
    Strict,
}

impl ParseMode {
    /// Map a "throw on error" flag to a mode.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => f.write_str("lenient"),
            ParseMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = UnknownParseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(UnknownParseMode(s.to_string())),
        }
    }
}

/// Parses PTML, falling back to the raw input on any error.
///
/// # Examples
///
/// ```
/// use ptml::parser::parse;
///
/// let parsed = parse("<b>Hello</b> World");
/// assert_eq!(parsed.text(), "Hello World");
/// assert_eq!(parsed.decorations().len(), 1);
///
/// let broken = parse("<b>Hello");
/// assert_eq!(broken.text(), "<b>Hello");
/// assert!(broken.is_plain());
/// ```
pub fn parse(input: &str) -> ParsedText {
    match parse_strict(input) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::debug!("ptml: falling back to plain text: {err}");
            ParsedText::plain(input)
        }
    }
}

/// Parses PTML, reporting malformed markup as an error.
///
/// # Examples
///
/// ```
/// use ptml::{ErrorKind, parser::parse_strict};
///
/// let err = parse_strict("<b></i>").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedEndTag);
/// assert_eq!(err.offset(), 6);
/// ```
pub fn parse_strict(input: &str) -> Result<ParsedText, PtmlError> {
    Scanner::new().run(input)
}

/// Parses PTML with an explicit [`ParseMode`].
///
/// With [`ParseMode::Lenient`] this never returns `Err`.
pub fn parse_with_mode(input: &str, mode: ParseMode) -> Result<ParsedText, PtmlError> {
    match mode {
        ParseMode::Strict => parse_strict(input),
        ParseMode::Lenient => Ok(parse(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_lenient() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(ParseMode::from_strict(true), ParseMode::Strict);
        assert_eq!(ParseMode::from_strict(false), ParseMode::Lenient);
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("strict".parse::<ParseMode>(), Ok(ParseMode::Strict));
        assert_eq!(" Lenient ".parse::<ParseMode>(), Ok(ParseMode::Lenient));
        assert_eq!(
            "loose".parse::<ParseMode>(),
            Err(UnknownParseMode("loose".into()))
        );
        assert_eq!(ParseMode::Strict.to_string(), "strict");
    }

    #[test]
    fn lenient_mode_never_errors() {
        for input in ["<b></i>", "<b>hi", "<", "</>", "<b=>", "<a-b>"] {
            let parsed = parse_with_mode(input, ParseMode::Lenient).unwrap();
            assert_eq!(parsed.text(), input);
            assert!(parsed.is_plain());
        }
    }

    #[test]
    fn strict_mode_reports_error() {
        let result = parse_with_mode("<b>hi", ParseMode::Strict);
        assert!(matches!(result, Err(PtmlError::UnclosedStartTag { .. })));
    }

    #[test]
    fn modes_agree_on_valid_input() {
        let input = "<b>x<i=1>y</i></b>z";
        let strict = parse_with_mode(input, ParseMode::Strict).unwrap();
        let lenient = parse_with_mode(input, ParseMode::Lenient).unwrap();
        assert_eq!(strict, lenient);
    }
}
