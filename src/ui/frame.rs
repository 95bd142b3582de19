//! Pure projection of buffer and cursor into display rows.
//!
//! A [`Screen`] is the renderer's output. The terminal view draws it through
//! ratatui; [`Screen::to_ansi`] serializes it as a plain text block with the
//! inverse-video escapes inlined.

use std::ops::Range;

use crate::editor::{Buffer, Cursor};

/// Banner text centered in the header row.
pub const BANNER: &str = "TinyText";

/// Escape that starts the header style.
pub const HEADER_ESCAPE: &str = "\u{1b}[47;100m";
/// Escape that starts the cursor cell style.
pub const CURSOR_ESCAPE: &str = "\u{1b}[47;30m";
/// Escape that resets all attributes.
pub const RESET_ESCAPE: &str = "\u{1b}[0m";

/// Visual role of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Plain,
    Header,
    Cursor,
}

/// A run of text sharing one highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlight: Highlight,
}

impl Segment {
    fn new(text: impl Into<String>, highlight: Highlight) -> Self {
        Self {
            text: text.into(),
            highlight,
        }
    }

    fn write_ansi(&self, out: &mut String) {
        let escape = match self.highlight {
            Highlight::Plain => {
                out.push_str(&self.text);
                return;
            }
            Highlight::Header => HEADER_ESCAPE,
            Highlight::Cursor => CURSOR_ESCAPE,
        };
        out.push_str(escape);
        out.push_str(&self.text);
        out.push_str(RESET_ESCAPE);
    }
}

/// One display row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub segments: Vec<Segment>,
}

impl Row {
    /// The row's text without any styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Rendered frame: a header row followed by one row per buffer line.
///
/// An empty screen (no header, no rows) is produced when the viewport is
/// narrower than the banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

impl Screen {
    pub const fn is_empty(&self) -> bool {
        self.header.is_none()
    }

    /// Serialize as a text block with ANSI escapes.
    ///
    /// The block starts with a blank line, then the header, then every row,
    /// each terminated by `\n`. An empty screen serializes to `""`.
    pub fn to_ansi(&self) -> String {
        let Some(header) = &self.header else {
            return String::new();
        };
        let mut out = String::from("\n");
        for row in std::iter::once(header).chain(&self.rows) {
            for segment in &row.segments {
                segment.write_ansi(&mut out);
            }
            out.push('\n');
        }
        out
    }
}

/// Render every line of `buffer` for a viewport `width` columns wide.
pub fn render_screen(buffer: &Buffer, cursor: Cursor, width: u16) -> Screen {
    render_window(buffer, cursor, width, 0..buffer.line_count())
}

/// Render the buffer lines in `window` for a viewport `width` columns wide.
pub fn render_window(buffer: &Buffer, cursor: Cursor, width: u16, window: Range<usize>) -> Screen {
    let Some(header) = header_row(width) else {
        return Screen::default();
    };
    let rows = buffer
        .lines()
        .enumerate()
        .skip(window.start)
        .take(window.end.saturating_sub(window.start))
        .map(|(idx, line)| {
            if idx == cursor.row {
                cursor_row(line, cursor.col)
            } else {
                Row {
                    segments: vec![Segment::new(line, Highlight::Plain)],
                }
            }
        })
        .collect();
    Screen {
        header: Some(header),
        rows,
    }
}

fn header_row(width: u16) -> Option<Row> {
    let spacing = usize::from(width).checked_sub(BANNER.len())?;
    let left = spacing / 2;
    let text = format!("{}{BANNER}{}", " ".repeat(left), " ".repeat(spacing - left));
    Some(Row {
        segments: vec![Segment::new(text, Highlight::Header)],
    })
}

/// Split `line` around the character at `col`; past the end, highlight a space.
fn cursor_row(line: &str, col: usize) -> Row {
    let mut chars = line.char_indices().skip(col);
    let mut segments = Vec::with_capacity(3);

    let Some((start, under)) = chars.next() else {
        if !line.is_empty() {
            segments.push(Segment::new(line, Highlight::Plain));
        }
        segments.push(Segment::new(" ", Highlight::Cursor));
        return Row { segments };
    };
    let end = start + under.len_utf8();

    if start > 0 {
        segments.push(Segment::new(&line[..start], Highlight::Plain));
    }
    segments.push(Segment::new(&line[start..end], Highlight::Cursor));
    if end < line.len() {
        segments.push(Segment::new(&line[end..], Highlight::Plain));
    }
    Row { segments }
}
