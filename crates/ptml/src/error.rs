//! Error types for PTML parsing.

use thiserror::Error;

use crate::parser::State;

/// Errors that can occur when parsing PTML in strict mode.
///
/// Every variant carries the byte offset into the input at which the problem
/// was detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PtmlError {
    /// A character that is neither a delimiter nor valid at this point.
    #[error("{message} (at position {offset})")]
    InvalidToken { offset: usize, message: String },

    /// An end tag that does not close the innermost open tag.
    #[error("{}", mismatch_message(*offset, expected.as_deref(), found))]
    MismatchedEndTag {
        offset: usize,
        expected: Option<String>,
        found: String,
    },

    /// The input ended in the middle of a tag.
    #[error("unexpected end of text while in state {state} (at position {offset})")]
    UnterminatedTag { offset: usize, state: State },

    /// The input ended while a start tag was still open.
    #[error("unexpected end of text: start tag <{tag}> is not closed (at position {offset})")]
    UnclosedStartTag { offset: usize, tag: String },
}

fn mismatch_message(offset: usize, expected: Option<&str>, found: &str) -> String {
    match expected {
        Some(open) => format!(
            "end tag </{found}> does not match start tag <{open}> (at position {offset})"
        ),
        None => format!("end tag </{found}> has no open tag to close (at position {offset})"),
    }
}

/// The category of a [`PtmlError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidToken,
    MismatchedEndTag,
    UnterminatedTag,
    UnclosedStartTag,
}

impl PtmlError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            PtmlError::InvalidToken { offset, .. }
            | PtmlError::MismatchedEndTag { offset, .. }
            | PtmlError::UnterminatedTag { offset, .. }
            | PtmlError::UnclosedStartTag { offset, .. } => *offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PtmlError::InvalidToken { .. } => ErrorKind::InvalidToken,
            PtmlError::MismatchedEndTag { .. } => ErrorKind::MismatchedEndTag,
            PtmlError::UnterminatedTag { .. } => ErrorKind::UnterminatedTag,
            PtmlError::UnclosedStartTag { .. } => ErrorKind::UnclosedStartTag,
        }
    }

    pub(crate) fn invalid_token(offset: usize, message: impl Into<String>) -> Self {
        PtmlError::InvalidToken {
            offset,
            message: message.into(),
        }
    }
}

/// Error returned when a string does not name a [`ParseMode`](crate::ParseMode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown parse mode: {0}")]
pub struct UnknownParseMode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_kind() {
        let err = PtmlError::UnclosedStartTag {
            offset: 4,
            tag: "b".into(),
        };
        assert_eq!(err.offset(), 4);
        assert_eq!(err.kind(), ErrorKind::UnclosedStartTag);
    }

    #[test]
    fn mismatch_message_with_open_tag() {
        let err = PtmlError::MismatchedEndTag {
            offset: 6,
            expected: Some("b".into()),
            found: "i".into(),
        };
        assert_eq!(
            err.to_string(),
            "end tag </i> does not match start tag <b> (at position 6)"
        );
    }

    #[test]
    fn mismatch_message_without_open_tag() {
        let err = PtmlError::MismatchedEndTag {
            offset: 3,
            expected: None,
            found: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            "end tag </b> has no open tag to close (at position 3)"
        );
    }

    #[test]
    fn unterminated_message_names_state() {
        let err = PtmlError::UnterminatedTag {
            offset: 5,
            state: State::Attribute,
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of text while in state attribute (at position 5)"
        );
    }
}
