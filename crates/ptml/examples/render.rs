//! Render PTML to the terminal.
//!
//! ```text
//! cargo run -p ptml --example render -- "<b>Hello</b> <color=#ff8800>World</color>"
//! PTML_MODE=strict PTML_LOG=debug cargo run -p ptml --example render -- "<b>oops</i>"
//! ```
//!
//! Recognized tags: `b`, `i`, `u`, `s`, `dim`, `color=<name|#rrggbb>` and
//! `bg=<name|#rrggbb>`. Other tags are parsed but not styled.

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use log::{Level, LevelFilter, Metadata, Record};
use ptml::{ParseMode, Segment};

const SAMPLE: &str = "Plain, <b>bold, <i>bold italic</i></b>, <color=red>red</color> \
and <bg=#224488><u>underlined on blue</u></bg>.";

struct StderrLogger {
    level: Level,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger() {
    let Some(level) = std::env::var("PTML_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
    else {
        return;
    };
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }
    Color::try_from(value).ok()
}

/// Emit one segment, applying every decoration that covers it.
fn emit_segment<W: Write>(out: &mut W, segment: &Segment<'_>) -> io::Result<()> {
    execute!(out, SetAttribute(Attribute::Reset))?;
    execute!(out, SetForegroundColor(Color::Reset))?;
    execute!(out, SetBackgroundColor(Color::Reset))?;

    for deco in &segment.decorations {
        let name = deco.tag_name().to_lowercase();
        match name.as_str() {
            "b" => execute!(out, SetAttribute(Attribute::Bold))?,
            "i" => execute!(out, SetAttribute(Attribute::Italic))?,
            "u" => execute!(out, SetAttribute(Attribute::Underlined))?,
            "s" => execute!(out, SetAttribute(Attribute::CrossedOut))?,
            "dim" => execute!(out, SetAttribute(Attribute::Dim))?,
            "color" => {
                if let Some(color) = parse_color(deco.attribute()) {
                    execute!(out, SetForegroundColor(color))?;
                }
            }
            "bg" => {
                if let Some(color) = parse_color(deco.attribute()) {
                    execute!(out, SetBackgroundColor(color))?;
                }
            }
            other => log::debug!("no terminal style for <{other}>"),
        }
    }

    write!(out, "{}", segment.text)
}

fn main() -> io::Result<()> {
    init_logger();

    let mode = match std::env::var("PTML_MODE") {
        Ok(value) => value.parse::<ParseMode>().unwrap_or_else(|err| {
            log::warn!("{err}, using {}", ParseMode::default());
            ParseMode::default()
        }),
        Err(_) => ParseMode::default(),
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        SAMPLE.to_string()
    } else {
        args.join(" ")
    };

    let parsed = match ptml::parse_with_mode(&input, mode) {
        Ok(parsed) => parsed,
        Err(err) => {
            let column = input[..err.offset()].chars().count();
            eprintln!("error: {err}");
            eprintln!("  {input}");
            eprintln!("  {}^", " ".repeat(column));
            std::process::exit(1);
        }
    };
    log::info!(
        "parsed {} decorations in {mode} mode",
        parsed.decorations().len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for segment in parsed.segments() {
        emit_segment(&mut out, &segment)?;
    }
    execute!(out, SetAttribute(Attribute::Reset))?;
    writeln!(out)?;
    out.flush()
}
