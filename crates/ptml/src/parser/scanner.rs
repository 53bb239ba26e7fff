//! Single-pass scanner for PTML.
//!
//! Walks the input one character at a time, switching on [`State`], and
//! feeds tag boundaries to the [`NestingTracker`].

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::decoration::Decoration;
use crate::error::PtmlError;
use crate::markup::ParsedText;

use super::nesting::NestingTracker;
use super::state::State;

pub(crate) struct Scanner {
    state: State,
    /// Output plain text (markup stripped).
    plain: String,
    /// Finalized decorations, in closing order.
    decorations: Vec<Decoration>,
    nesting: NestingTracker,
    tag_name: String,
    attribute: String,
}

impl Scanner {
    pub(crate) fn new() -> Self {
        Self {
            state: State::PlainText,
            plain: String::new(),
            decorations: Vec::new(),
            nesting: NestingTracker::new(),
            tag_name: String::new(),
            attribute: String::new(),
        }
    }

    /// Scan the whole input, then validate the final state.
    pub(crate) fn run(mut self, input: &str) -> Result<ParsedText, PtmlError> {
        let mut last_offset = 0;
        for (offset, c) in input.char_indices() {
            last_offset = offset;
            self.step(offset, c)?;
        }
        self.finish(last_offset)
    }

    fn step(&mut self, offset: usize, c: char) -> Result<(), PtmlError> {
        match self.state {
            State::PlainText => {
                if c == '<' {
                    self.nesting.begin_range(self.plain.len());
                    self.state = State::StartTagName;
                } else {
                    self.plain.push(c);
                }
            }
            State::StartTagName => match c {
                '/' => {
                    if !self.tag_name.is_empty() {
                        return Err(PtmlError::invalid_token(
                            offset,
                            "invalid token '/', expected tag name",
                        ));
                    }
                    self.nesting.discard_range();
                    self.state = State::EndTagName;
                }
                '=' => {
                    if self.tag_name.is_empty() {
                        return Err(PtmlError::invalid_token(
                            offset,
                            "invalid token '=', expected tag name",
                        ));
                    }
                    self.state = State::Attribute;
                }
                '>' => {
                    if self.tag_name.is_empty() {
                        return Err(PtmlError::invalid_token(
                            offset,
                            "invalid token '>', expected tag name",
                        ));
                    }
                    self.open_tag();
                }
                _ => self.push_name_char(offset, c)?,
            },
            State::Attribute => {
                if c == '>' {
                    if self.attribute.is_empty() {
                        return Err(PtmlError::invalid_token(
                            offset,
                            "invalid token '>', expected attribute",
                        ));
                    }
                    self.open_tag();
                } else {
                    self.attribute.push(c);
                }
            }
            State::EndTagName => {
                if c == '>' {
                    if self.tag_name.is_empty() {
                        return Err(PtmlError::invalid_token(
                            offset,
                            "invalid token '>', expected tag name",
                        ));
                    }
                    self.close_tag(offset)?;
                } else {
                    self.push_name_char(offset, c)?;
                }
            }
        }
        Ok(())
    }

    fn push_name_char(&mut self, offset: usize, c: char) -> Result<(), PtmlError> {
        if !is_tag_name_char(c) {
            return Err(PtmlError::invalid_token(
                offset,
                format!("token {c:?} cannot be used in a tag name"),
            ));
        }
        self.tag_name.push(c);
        Ok(())
    }

    fn open_tag(&mut self) {
        let name = std::mem::take(&mut self.tag_name);
        let attribute = std::mem::take(&mut self.attribute);
        self.nesting.open(name, attribute);
        self.state = State::PlainText;
    }

    fn close_tag(&mut self, offset: usize) -> Result<(), PtmlError> {
        let decoration = self
            .nesting
            .close(&self.tag_name, self.plain.len(), offset)?;
        log::trace!(
            "ptml: closed <{}> covering {}..{} (depth {})",
            decoration.tag_name(),
            decoration.start(),
            decoration.end(),
            self.nesting.depth()
        );
        self.decorations.push(decoration);
        self.tag_name.clear();
        self.state = State::PlainText;
        Ok(())
    }

    fn finish(self, last_offset: usize) -> Result<ParsedText, PtmlError> {
        if !self.state.is_terminal() {
            return Err(PtmlError::UnterminatedTag {
                offset: last_offset,
                state: self.state,
            });
        }
        if let Some(tag) = self.nesting.innermost() {
            return Err(PtmlError::UnclosedStartTag {
                offset: last_offset,
                tag: tag.to_string(),
            });
        }
        Ok(ParsedText::new(self.plain, self.decorations))
    }
}

/// Letters of any case or script, and decimal digits. Other numerics such
/// as `²` or `Ⅻ` and combining marks are rejected.
fn is_tag_name_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}
