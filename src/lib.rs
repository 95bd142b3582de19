// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. buffer::BufferError)
    clippy::module_name_repetitions
)]

//! # TinyText
//!
//! A minimal terminal line editor.
//!
//! TinyText edits one file as a list of lines with a single cursor:
//! - Character insertion, Tab (four spaces), Backspace, Delete, Enter
//! - Arrow key navigation with column clamping
//! - Save on `Ctrl+S`, save and quit on `Ctrl+C`
//!
//! ## Architecture
//!
//! TinyText uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Line buffer and cursor engine
//! - [`ui`]: Screen projection and terminal UI
//! - [`storage`]: Loading and saving the backing file
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod storage;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Buffer, Cursor, Direction, Editor};
    pub use crate::ui::viewport::Viewport;
}
