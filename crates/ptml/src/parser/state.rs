//! Scanner states.

use std::fmt;

/// Where the scanner is relative to the tag markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Outside any tag. Initial and only accepting state.
    #[default]
    PlainText,
    /// After `<`, collecting a start tag name (or about to see `/`).
    StartTagName,
    /// After `<name=`, collecting the attribute up to `>`.
    Attribute,
    /// After `</`, collecting an end tag name.
    EndTagName,
}

impl State {
    /// Returns true if the scanner may stop in this state.
    pub fn is_terminal(self) -> bool {
        self == State::PlainText
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::PlainText => "plain text",
            State::StartTagName => "start tag name",
            State::Attribute => "attribute",
            State::EndTagName => "end tag name",
        };
        f.write_str(name)
    }
}
