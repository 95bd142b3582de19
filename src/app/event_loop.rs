use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use crossterm::event;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::{App, Message, Model, update};
use crate::editor::{Buffer, Editor};
use crate::storage;

/// Holds the latest resize until the terminal stops changing size.
pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or saved, if terminal
    /// initialization fails, or if an edit leaves the buffer inconsistent.
    pub fn run(&mut self) -> Result<()> {
        // Load before taking over the terminal so errors print normally
        let buffer = self.load_buffer()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - tinytext requires an interactive terminal")?;
        let size = terminal.size()?;
        execute!(stdout(), EnableBracketedPaste)?;

        let mut model = Model::new(Editor::new(buffer), (size.width, size.height));
        info!(
            file = %model.file_name(),
            lines = model.editor.buffer().line_count(),
            width = size.width,
            height = size.height,
            "session started"
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
        info!(ok = result.is_ok(), "session ended");

        result
    }

    pub(super) fn load_buffer(&self) -> Result<Buffer> {
        let Some(path) = &self.file_path else {
            return Ok(Buffer::transient());
        };
        let text =
            storage::load(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(Buffer::from_text(&text).with_path(path))
    }

    /// Apply one message: pure update, then side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) -> Result<()> {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg)
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                Self::dispatch(model, Message::Resize(width, height))?;
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Coalesce key repeat bursts and pastes into a single render.
                loop {
                    let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if let Some(msg) =
                        Self::handle_event(&event::read()?, event_ms, &mut resize_debouncer)
                    {
                        Self::dispatch(model, msg)?;
                        needs_render = true;
                    }
                    if model.should_quit || !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if let Some(err) = model.fatal_error() {
                return Err(anyhow!("Editor state became inconsistent: {err}"));
            }
            if model.should_quit {
                debug!("quit requested");
                break;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }
        }
        Ok(())
    }
}
