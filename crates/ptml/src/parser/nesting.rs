//! Nesting tracker for open tags.
//!
//! Two stacks move in lockstep: one holds the pending start tags, the other
//! the plain-text offset where each of them began. The range start is pushed
//! as soon as `<` is seen, before it is known whether the tag is a start or
//! an end tag, so an end tag has to discard it again.

use crate::decoration::{Decoration, tag_names_match};
use crate::error::PtmlError;

/// A start tag whose end tag has not been seen yet.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingTag {
    name: String,
    attribute: String,
}

#[derive(Debug, Default)]
pub(crate) struct NestingTracker {
    open_tags: Vec<PendingTag>,
    range_starts: Vec<usize>,
}

impl NestingTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record where a prospective tag begins in the plain text.
    pub(crate) fn begin_range(&mut self, plain_len: usize) {
        self.range_starts.push(plain_len);
    }

    /// Drop the range start pushed for a tag that turned out to be an end tag.
    pub(crate) fn discard_range(&mut self) {
        self.range_starts.pop();
    }

    /// Push a completed start tag.
    pub(crate) fn open(&mut self, name: String, attribute: String) {
        self.open_tags.push(PendingTag { name, attribute });
        debug_assert_eq!(self.open_tags.len(), self.range_starts.len());
    }

    /// Close the innermost open tag with `name`, producing its decoration.
    ///
    /// `offset` is the input position of the end tag's `>` and is only used
    /// for error reporting.
    pub(crate) fn close(
        &mut self,
        name: &str,
        plain_len: usize,
        offset: usize,
    ) -> Result<Decoration, PtmlError> {
        debug_assert_eq!(self.open_tags.len(), self.range_starts.len());
        let Some(tag) = self.open_tags.pop() else {
            return Err(PtmlError::MismatchedEndTag {
                offset,
                expected: None,
                found: name.to_string(),
            });
        };

        if !tag_names_match(&tag.name, name) {
            return Err(PtmlError::MismatchedEndTag {
                offset,
                expected: Some(tag.name),
                found: name.to_string(),
            });
        }

        let start = self.range_starts.pop().unwrap_or(plain_len);
        Ok(Decoration::new(start, plain_len, tag.name, tag.attribute))
    }

    /// Name of the innermost tag that is still open.
    pub(crate) fn innermost(&self) -> Option<&str> {
        self.open_tags.last().map(|t| t.name.as_str())
    }

    pub(crate) fn depth(&self) -> usize {
        self.open_tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut nesting = NestingTracker::new();
        nesting.begin_range(3);
        nesting.open("b".into(), String::new());
        assert_eq!(nesting.innermost(), Some("b"));

        let deco = nesting.close("B", 7, 12).unwrap();
        assert_eq!(deco, Decoration::new(3, 7, "b", ""));
        assert_eq!(nesting.depth(), 0);
    }

    #[test]
    fn close_pops_innermost_first() {
        let mut nesting = NestingTracker::new();
        nesting.begin_range(0);
        nesting.open("outer".into(), String::new());
        nesting.begin_range(2);
        nesting.open("inner".into(), "x".into());

        let inner = nesting.close("inner", 4, 0).unwrap();
        assert_eq!(inner, Decoration::new(2, 4, "inner", "x"));
        let outer = nesting.close("outer", 6, 0).unwrap();
        assert_eq!(outer, Decoration::new(0, 6, "outer", ""));
    }

    #[test]
    fn close_with_nothing_open() {
        let mut nesting = NestingTracker::new();
        let err = nesting.close("b", 0, 3).unwrap_err();
        assert_eq!(
            err,
            PtmlError::MismatchedEndTag {
                offset: 3,
                expected: None,
                found: "b".into(),
            }
        );
    }

    #[test]
    fn close_with_wrong_name() {
        let mut nesting = NestingTracker::new();
        nesting.begin_range(0);
        nesting.open("b".into(), String::new());
        let err = nesting.close("i", 0, 6).unwrap_err();
        assert_eq!(
            err,
            PtmlError::MismatchedEndTag {
                offset: 6,
                expected: Some("b".into()),
                found: "i".into(),
            }
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn close_with_stacks_out_of_step_panics() {
        let mut nesting = NestingTracker::new();
        nesting.begin_range(0);
        let _ = nesting.close("b", 0, 0);
    }

    #[test]
    fn discarded_range_keeps_stacks_aligned() {
        let mut nesting = NestingTracker::new();
        nesting.begin_range(0);
        nesting.open("b".into(), String::new());
        // `</` pushes then discards
        nesting.begin_range(5);
        nesting.discard_range();

        let deco = nesting.close("b", 5, 0).unwrap();
        assert_eq!(deco.range(), 0..5);
    }
}
