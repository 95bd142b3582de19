use tracing::{debug, error};

use crate::editor::Direction;
use crate::ui::text_rows;

use super::Model;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert text at the cursor; `\n` splits the line
    InsertText(String),
    /// Insert four spaces
    Tab,
    Backspace,
    Delete,
    /// Split the line at the cursor
    Enter,

    // Navigation
    Move(Direction),

    // File
    Save,
    /// Save, then stop the session
    Quit,

    // Terminal
    Resize(u16, u16),
    Redraw,
}

/// Pure state transition: apply `msg` to `model`.
///
/// Saving is a side effect and happens outside this function; `Save` and
/// `Quit` only update flags here.
pub fn update(mut model: Model, msg: Message) -> Model {
    debug!(?msg, "update");
    let editor = &mut model.editor;
    let result = match msg {
        Message::InsertText(text) => editor.insert_text(&text),
        Message::Tab => editor.insert_tab(),
        Message::Enter => editor.split_line(),
        Message::Backspace => editor.delete_back().map(drop),
        Message::Delete => editor.delete_forward().map(drop),
        Message::Move(direction) => editor.move_cursor(direction),
        Message::Resize(width, height) => {
            model.viewport.resize(width, text_rows(height));
            Ok(())
        }
        Message::Quit => {
            model.should_quit = true;
            Ok(())
        }
        Message::Save | Message::Redraw => Ok(()),
    };

    if let Err(err) = result {
        error!(%err, cursor = ?model.editor.cursor(), "edit rejected by buffer");
        model.fail(err);
    }
    model.sync_viewport();
    model
}
