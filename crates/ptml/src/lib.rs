//! PTML: a tiny tagged-text markup parser.
//!
//! This crate separates text such as `<b>Hello</b> <color=red>World</color>`
//! into the plain text `Hello World` and a list of [`Decoration`]s telling a
//! renderer which ranges carry which tag.
//!
//! # Overview
//!
//! - `<name>text</name>` - Decorate `text` with `name`
//! - `<name=value>text</name>` - Same, with a raw attribute string `value`
//! - Tag names are one or more letters or digits, matched case-insensitively
//! - Tags nest, and must close in reverse order of opening
//!
//! There is no escape syntax: a `<` in the text always starts a tag, and an
//! attribute runs verbatim up to the next `>`.
//!
//! # Error handling
//!
//! [`parse`] is lenient: if the markup is malformed in any way, the input is
//! returned unchanged as plain text with no decorations. [`parse_strict`]
//! reports the problem as a [`PtmlError`] with the byte offset where it was
//! found.
//!
//! # Usage
//!
//! ```
//! use ptml::{ErrorKind, parse, parse_strict};
//!
//! let parsed = parse("<b><i>hi</i></b>");
//! assert_eq!(parsed.text(), "hi");
//! // Decorations come out in closing order: inner first.
//! assert_eq!(parsed.decorations()[0].tag_name(), "i");
//! assert_eq!(parsed.decorations()[1].tag_name(), "b");
//!
//! let err = parse_strict("<b>hi").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnclosedStartTag);
//! ```

pub mod decoration;
pub mod error;
pub mod markup;
pub mod parser;

// Re-export main types at crate root
pub use decoration::Decoration;
pub use error::{ErrorKind, PtmlError, UnknownParseMode};
pub use markup::{ParsedText, Segment, SegmentIterator};
pub use parser::{ParseMode, State, parse, parse_strict, parse_with_mode};
