use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::editor::{Buffer, Editor};
use crate::ui::frame::{Screen, render_window};
use crate::ui::text_rows;
use crate::ui::viewport::Viewport;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Buffer and cursor
    pub editor: Editor,
    /// Scroll state of the text area
    pub viewport: Viewport,
    /// Set once the event loop should stop
    pub should_quit: bool,
    toast: Option<Toast>,
    fatal: Option<String>,
}

impl Model {
    /// Create a model for `editor` in a terminal of `(width, height)`.
    pub fn new(editor: Editor, terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        let viewport = Viewport::new(width, text_rows(height), editor.buffer().line_count());
        let mut model = Self {
            editor,
            viewport,
            should_quit: false,
            toast: None,
            fatal: None,
        };
        model.sync_viewport();
        model
    }

    /// Name shown in the status bar.
    pub fn file_name(&self) -> String {
        self.editor
            .buffer()
            .path()
            .and_then(|path| path.file_name())
            .map_or_else(
                || "untitled".to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Project the visible window of the buffer for a terminal `width`
    /// columns wide.
    pub fn screen(&self, width: u16) -> Screen {
        render_window(
            self.editor.buffer(),
            self.editor.cursor(),
            width,
            self.viewport.visible_range(),
        )
    }

    /// Keep the viewport sized to the buffer with the cursor row on screen.
    pub(super) fn sync_viewport(&mut self) {
        self.viewport
            .set_line_count(self.editor.buffer().line_count());
        self.viewport.scroll_to_show(self.editor.cursor().row);
    }

    /// Record an unrecoverable error and stop the event loop.
    pub(super) fn fail(&mut self, err: impl Display) {
        self.fatal = Some(err.to_string());
        self.should_quit = true;
    }

    /// The error that stopped the session, if any.
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal.as_deref()
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Editor::new(Buffer::transient()), (80, 24))
    }
}
