use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};
use crate::editor::Direction;

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key),
            Event::Paste(text) => Some(Message::InsertText(text.clone())),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Message::Quit),
                KeyCode::Char('s') => Some(Message::Save),
                KeyCode::Char('l') => Some(Message::Redraw),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up => Some(Message::Move(Direction::Up)),
            KeyCode::Down => Some(Message::Move(Direction::Down)),
            KeyCode::Left => Some(Message::Move(Direction::Left)),
            KeyCode::Right => Some(Message::Move(Direction::Right)),
            KeyCode::Tab => Some(Message::Tab),
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Delete => Some(Message::Delete),
            KeyCode::Enter => Some(Message::Enter),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::InsertText(c.to_string()))
            }
            _ => None,
        }
    }
}
