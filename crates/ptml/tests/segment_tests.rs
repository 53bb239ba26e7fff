//! Tests for walking parsed text the way a renderer does.

use ptml::{ParsedText, Segment};

fn describe(segment: &Segment<'_>) -> String {
    let tags: Vec<String> = segment
        .decorations
        .iter()
        .map(|d| match d.attribute_value() {
            Some(value) => format!("{}={}", d.tag_name(), value),
            None => d.tag_name().to_string(),
        })
        .collect();
    format!(
        "{:?} {}..{} [{}]",
        segment.text,
        segment.range.start,
        segment.range.end,
        tags.join(" ")
    )
}

fn render(parsed: &ParsedText) -> String {
    parsed
        .segments()
        .map(|s| describe(&s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn segments_nested() {
    let parsed = ptml::parse("Plain <b>bold <color=red>red</color></b> tail");
    insta::assert_snapshot!(render(&parsed), @r#"
    "Plain " 0..6 []
    "bold " 6..11 [b]
    "red" 11..14 [b color=red]
    " tail" 14..19 []
    "#);
}

#[test]
fn segments_adjacent() {
    let parsed = ptml::parse("<i>a</i><u=single>b</u>");
    insta::assert_snapshot!(render(&parsed), @r#"
    "a" 0..1 [i]
    "b" 1..2 [u=single]
    "#);
}

#[test]
fn segments_cover_whole_text() {
    let parsed = ptml::parse("x<a>y<b>z</b></a><c></c>w");
    let joined: String = parsed.segments().map(|s| s.text).collect();
    assert_eq!(joined, parsed.text());

    let mut pos = 0;
    for segment in parsed.segments() {
        assert_eq!(segment.range.start, pos);
        pos = segment.range.end;
    }
    assert_eq!(pos, parsed.len());
}

#[test]
fn segments_of_fallback_text() {
    let parsed = ptml::parse("<b>broken");
    let segments: Vec<_> = parsed.segments().collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "<b>broken");
    assert!(segments[0].decorations.is_empty());
}

#[test]
fn char_ranges_for_glyphs() {
    let parsed = ptml::parse("ÀB<b>ÇD</b>E");
    let deco = &parsed.decorations()[0];
    assert_eq!(deco.range(), 3..6);
    assert_eq!(parsed.char_range(deco), 2..4);
    assert_eq!(parsed.slice(deco), "ÇD");
}

#[test]
fn decorations_at_offset() {
    let parsed = ptml::parse("<a>x<b>y</b></a>");
    let names = |offset| {
        parsed
            .decorations_at(offset)
            .iter()
            .map(|d| d.tag_name().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(0), ["a"]);
    assert_eq!(names(1), ["b", "a"]);
    assert!(names(2).is_empty());
}
