use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::app::{App, Message, Model, ToastLevel};
use crate::storage;

impl App {
    /// Run the I/O that follows a state transition.
    ///
    /// Save failures are fatal: the error is returned and the session ends.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) -> Result<()> {
        match msg {
            Message::Save => {
                if Self::save_buffer(model)? {
                    model.show_toast(ToastLevel::Info, format!("Saved {}", model.file_name()));
                } else {
                    model.show_toast(ToastLevel::Warning, "No file to save to");
                }
            }
            Message::Quit => {
                Self::save_buffer(model)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Write the buffer to its backing file. Returns `false` when the buffer
    /// has no path.
    fn save_buffer(model: &mut Model) -> Result<bool> {
        let Some(path) = model.editor.buffer().path().map(ToOwned::to_owned) else {
            warn!("save requested for a buffer without a file");
            return Ok(false);
        };
        let text = model.editor.buffer().serialize();
        storage::save(&path, &text)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        model.editor.mark_clean();
        info!(path = %path.display(), lines = model.editor.buffer().line_count(), "saved");
        Ok(true)
    }
}
