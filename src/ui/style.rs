//! Terminal styles for rendered segments.
//!
//! Colors follow the escapes in [`super::frame`]: ANSI 47 is ratatui's
//! `Gray`, ANSI 100 is `DarkGray`.

use ratatui::style::{Color, Style};

use super::frame::Highlight;

/// Get the style for a segment highlight.
pub fn style_for_highlight(highlight: Highlight) -> Style {
    match highlight {
        Highlight::Plain => Style::default(),
        Highlight::Header => Style::default().bg(Color::DarkGray),
        Highlight::Cursor => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

/// Style of the bottom status bar.
pub fn status_bar_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
