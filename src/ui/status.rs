use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style::status_bar_style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_name();
    let dirty_indicator = if model.editor.buffer().is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let cursor = model.editor.cursor();
    let status = format!(
        " {filename}{dirty_indicator}  Ln {}, Col {}  Ctrl+S:save  Ctrl+C:save+quit",
        cursor.row + 1,
        model.editor.visual_col() + 1
    );

    frame.render_widget(Paragraph::new(status).style(status_bar_style()), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[info]", status_bar_style()),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
