//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which buffer lines fit in the text area and keeps
//! the cursor row inside it.

use std::ops::Range;

/// The window of buffer lines shown in the text area.
///
/// Width is the full terminal width (the header is centred in it); height
/// counts text rows only. `offset` is the first buffer line on screen.
///
/// # Example
///
/// ```
/// use tinytext::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10, 100);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.scroll_to_show(25);
/// assert_eq!(vp.visible_range(), 16..26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    line_count: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the top of a buffer with `line_count`
    /// lines.
    pub const fn new(width: u16, height: u16, line_count: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            line_count,
        }
    }

    /// First visible buffer line.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Rows available for buffer lines.
    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// Get the range of visible lines, clamped to the buffer bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.line_count);
        let end = (self.offset + self.height as usize).min(self.line_count);
        start..end
    }

    /// Scroll the minimum amount needed for `row` to be visible.
    pub fn scroll_to_show(&mut self, row: usize) {
        let height = self.height as usize;
        if height == 0 {
            self.offset = row.min(self.max_offset());
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Apply a new terminal width and text area height.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Track a buffer that grew or shrank.
    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.line_count.saturating_sub(self.height as usize)
    }
}
