//! Text buffer and cursor engine.
//!
//! - [`Buffer`]: line storage with an explicit mutation API
//! - [`Cursor`]: logical position in character offsets
//! - [`Editor`]: applies edit operations to a buffer and its cursor

mod buffer;
mod cursor;
mod engine;

pub use buffer::{Buffer, BufferError};
pub use cursor::{Cursor, Direction, visual_col};
pub use engine::{Editor, TAB};
