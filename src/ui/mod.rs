//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`frame`]: Pure projection of buffer and cursor into display rows
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Terminal colors

pub mod frame;
pub mod style;
pub mod viewport;

mod render;
mod status;

pub use frame::{Screen, render_screen, render_window};
pub use render::render;

/// Terminal rows not available to buffer lines (header and status bar).
pub const CHROME_ROWS: u16 = 2;

/// Rows left for buffer lines in a terminal `height` rows tall.
pub const fn text_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}
