//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
}

impl App {
    /// Create a new application editing the given file.
    ///
    /// The file is created empty if it does not exist.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path: Some(file_path),
        }
    }

    /// Create an application with an unsaved scratch buffer.
    ///
    /// Library API for embedders: the `tinytext` binary always opens a file.
    /// Saving a scratch buffer only shows a warning.
    pub const fn scratch() -> Self {
        Self { file_path: None }
    }
}
