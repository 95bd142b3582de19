use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::frame::Row;
use super::{status, style};

/// Render the complete UI.
///
/// Layout, top to bottom: header banner, buffer lines in the viewport
/// window, status bar (replaced by the toast while one is active).
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let screen = model.screen(area.width);
    let Some(header) = &screen.header else {
        return;
    };

    let [header_area, text_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(to_line(header)), header_area);

    let content: Vec<Line> = screen.rows.iter().map(to_line).collect();
    frame.render_widget(Paragraph::new(content), text_area);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, status_area);
    } else {
        status::render_status_bar(model, frame, status_area);
    }
}

fn to_line(row: &Row) -> Line<'static> {
    let spans: Vec<Span> = row
        .segments
        .iter()
        .map(|segment| {
            Span::styled(
                displayable(&segment.text),
                style::style_for_highlight(segment.highlight),
            )
        })
        .collect();
    Line::from(spans)
}

/// Replace control characters (`\r`, `\t`, ...) with a space.
///
/// ratatui skips control characters when drawing, which would hide the
/// cursor cell on them. One space per character matches the one column
/// [`crate::editor::visual_col`] counts for each.
fn displayable(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}
