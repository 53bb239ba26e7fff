//! Decoration type for tagged regions in parsed text.

use std::ops::Range;

/// A tagged region within the plain text produced by the parser.
///
/// Decorations reference byte positions in the plain text (with markup
/// stripped). The range is half-open: `start` is inclusive, `end` exclusive.
/// A tag that wraps no text, such as `<br></br>`, yields a zero-length
/// decoration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decoration {
    start: usize,
    end: usize,
    tag_name: String,
    attribute: String,
}

impl Decoration {
    /// Create a decoration covering `start..end`.
    pub fn new(
        start: usize,
        end: usize,
        tag_name: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        debug_assert!(start <= end, "decoration start {start} past end {end}");
        Self {
            start,
            end,
            tag_name: tag_name.into(),
            attribute: attribute.into(),
        }
    }

    /// Start byte offset (inclusive) in the plain text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End byte offset (exclusive) in the plain text.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Tag name as written in the start tag.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Raw attribute text, or an empty string when the tag had no `=`.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The attribute, if the start tag carried one.
    ///
    /// ```
    /// use ptml::parse;
    ///
    /// let parsed = parse("<color=red>hi</color> <b>!</b>");
    /// assert_eq!(parsed.decorations()[0].attribute_value(), Some("red"));
    /// assert_eq!(parsed.decorations()[1].attribute_value(), None);
    /// ```
    pub fn attribute_value(&self) -> Option<&str> {
        if self.attribute.is_empty() {
            None
        } else {
            Some(&self.attribute)
        }
    }

    /// Case-insensitive tag name comparison, using the same folding as the
    /// parser when it matches end tags.
    pub fn is_tag(&self, name: &str) -> bool {
        tag_names_match(&self.tag_name, name)
    }

    /// Returns the length of this decoration in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this decoration covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this decoration contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this decoration overlaps with another.
    pub fn overlaps(&self, other: &Decoration) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Locale-independent case-insensitive equality of two tag names.
///
/// Each character is mapped to its simple uppercase form; characters whose
/// uppercase expands to several characters (`ß`) are left as they are.
pub(crate) fn tag_names_match(a: &str, b: &str) -> bool {
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
