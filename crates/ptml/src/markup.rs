//! ParsedText result type.
//!
//! This is the result of parsing PTML: plain text plus the decorations that
//! refer into it.

use std::ops::Range;

use crate::decoration::Decoration;

/// The result of parsing PTML.
///
/// Contains the plain text (with markup stripped) and the decorations, in
/// the order their end tags appeared.
///
/// # Examples
///
/// ```
/// let parsed = ptml::parse("<b><i>hi</i></b>");
/// assert_eq!(parsed.text(), "hi");
/// let names: Vec<_> = parsed.decorations().iter().map(|d| d.tag_name()).collect();
/// assert_eq!(names, ["i", "b"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedText {
    /// Plain text with all tags stripped.
    text: String,
    /// Decorations referencing byte positions in `text`.
    decorations: Vec<Decoration>,
}

impl ParsedText {
    /// Create a new ParsedText with the given text and decorations.
    pub fn new(text: String, decorations: Vec<Decoration>) -> Self {
        Self { text, decorations }
    }

    /// Create a ParsedText from plain text (no decorations).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            decorations: Vec::new(),
        }
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all decorations, in closing order.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Split into the plain text and the decoration list.
    pub fn into_parts(self) -> (String, Vec<Decoration>) {
        (self.text, self.decorations)
    }

    /// Returns true if there are no decorations (plain text only).
    pub fn is_plain(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The plain text covered by a decoration.
    ///
    /// # Panics
    ///
    /// Panics if the decoration does not refer into this text.
    pub fn slice(&self, decoration: &Decoration) -> &str {
        &self.text[decoration.range()]
    }

    /// Convert a decoration's byte range into a range of `char` indices.
    ///
    /// ```
    /// let parsed = ptml::parse("日<b>本</b>語");
    /// let deco = &parsed.decorations()[0];
    /// assert_eq!(deco.range(), 3..6);
    /// assert_eq!(parsed.char_range(deco), 1..2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the decoration does not refer into this text.
    pub fn char_range(&self, decoration: &Decoration) -> Range<usize> {
        let start = self.text[..decoration.start()].chars().count();
        let len = self.slice(decoration).chars().count();
        start..start + len
    }

    /// Get all decorations that contain a specific byte offset.
    pub fn decorations_at(&self, offset: usize) -> Vec<&Decoration> {
        self.decorations
            .iter()
            .filter(|d| d.contains(offset))
            .collect()
    }

    /// Iterate over decorated segments.
    ///
    /// The plain text is split at every decoration boundary. Undecorated
    /// stretches are included with an empty decoration list.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator::new(self)
    }
}

/// A run of plain text covered by the same set of decorations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte range of `text` within the plain text.
    pub range: Range<usize>,
    /// Decorations covering this run, in reverse closing order (outermost
    /// first for parsed text).
    pub decorations: Vec<&'a Decoration>,
}

/// Iterator over decorated segments in ParsedText.
pub struct SegmentIterator<'a> {
    parsed: &'a ParsedText,
    pos: usize,
}

impl<'a> SegmentIterator<'a> {
    fn new(parsed: &'a ParsedText) -> Self {
        Self { parsed, pos: 0 }
    }
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = &self.parsed.text;
        if self.pos >= text.len() {
            return None;
        }

        // Find the next boundary (where the decoration set changes)
        let mut end = text.len();
        for deco in &self.parsed.decorations {
            if deco.start() > self.pos && deco.start() < end {
                end = deco.start();
            }
            if deco.end() > self.pos && deco.end() < end {
                end = deco.end();
            }
        }

        let decorations = self
            .parsed
            .decorations
            .iter()
            .rev()
            .filter(|d| d.contains(self.pos))
            .collect();

        let range = self.pos..end;
        let slice = text.get(range.clone())?;
        self.pos = end;

        Some(Segment {
            text: slice,
            range,
            decorations,
        })
    }
}
