use unicode_width::UnicodeWidthChar;

/// Logical cursor position in the editor buffer.
///
/// `col` is a character offset, not a byte offset or a display column.
/// The on-screen column is derived from the line text with [`visual_col`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based character offset within the line.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at row 0, column 0.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Display column of this cursor on `line`.
    pub fn visual_col(&self, line: &str) -> usize {
        visual_col(line, self.col)
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Sum of the display widths of the first `col` characters of `line`.
///
/// Control characters count as one column.
pub fn visual_col(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|ch| ch.width().unwrap_or(1))
        .sum()
}
