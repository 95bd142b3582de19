use super::buffer::{Buffer, BufferError, byte_offset};
use super::cursor::{self, Cursor, Direction};

/// Text inserted by the Tab key.
pub const TAB: &str = "    ";

/// Buffer plus cursor, driven one edit operation at a time.
///
/// Every operation validates the cursor against the buffer before calling a
/// buffer primitive, so a [`BufferError`] coming out of here means an
/// invariant was already broken.
///
/// Vertical and rightward movement clamp at the last line: the cursor only
/// sits one row past the end in a transient document with no lines.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
}

impl Editor {
    /// Wrap a buffer with the cursor at the origin.
    pub const fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
        }
    }

    /// Editor over an empty transient document.
    pub const fn transient() -> Self {
        Self::new(Buffer::transient())
    }

    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Record that the buffer now matches its backing file.
    pub const fn mark_clean(&mut self) {
        self.buffer.mark_clean();
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Display column of the cursor on its line (0 past the last line).
    pub fn visual_col(&self) -> usize {
        self.buffer
            .line(self.cursor.row)
            .map_or(0, |line| cursor::visual_col(line, self.cursor.col))
    }

    /// Whether the cursor lies within the buffer bounds.
    pub fn is_consistent(&self) -> bool {
        let Cursor { row, col } = self.cursor;
        match self.buffer.line_len(row) {
            Ok(len) => col <= len,
            Err(_) => row == self.buffer.line_count() && col == 0,
        }
    }

    /// Move the cursor in the given direction.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn move_cursor(&mut self, direction: Direction) -> Result<(), BufferError> {
        if self.past_last_line() {
            return Ok(());
        }
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    /// Insert text at the cursor (typed characters or pasted text).
    ///
    /// Embedded `\n` splits the line, so stored lines never contain one.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn insert_text(&mut self, text: &str) -> Result<(), BufferError> {
        for (idx, piece) in text.split('\n').enumerate() {
            if idx > 0 {
                self.split_line()?;
            }
            self.insert_fragment(piece)?;
        }
        Ok(())
    }

    /// Insert a character at the cursor.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn insert_char(&mut self, ch: char) -> Result<(), BufferError> {
        self.insert_text(ch.encode_utf8(&mut [0; 4]))
    }

    /// Expand a tab to four spaces at the cursor.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn insert_tab(&mut self) -> Result<(), BufferError> {
        self.insert_fragment(TAB)
    }

    /// Split the current line at the cursor (Enter key).
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn split_line(&mut self) -> Result<(), BufferError> {
        self.ensure_line()?;
        let Cursor { row, col } = self.cursor;
        let line = self.buffer.line(row)?;
        let at = byte_offset(line, col);
        let (before, after) = (line[..at].to_string(), line[at..].to_string());
        self.buffer.set_line(row, before)?;
        self.buffer.insert_line(row + 1, after)?;
        self.cursor = Cursor::at(row + 1, 0);
        Ok(())
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At the start of a line, joins it onto the previous line.
    /// Returns `true` if the buffer changed.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn delete_back(&mut self) -> Result<bool, BufferError> {
        if self.past_last_line() {
            return Ok(false);
        }
        let Cursor { row, col } = self.cursor;

        if col > 0 {
            let line = self.buffer.line(row)?;
            let (start, end) = (byte_offset(line, col - 1), byte_offset(line, col));
            let joined = format!("{}{}", &line[..start], &line[end..]);
            self.buffer.set_line(row, joined)?;
            self.cursor.col -= 1;
            return Ok(true);
        }
        if row == 0 {
            return Ok(false);
        }

        let line = self.buffer.delete_line(row)?;
        let prev = self.buffer.line(row - 1)?;
        let prev_len = prev.chars().count();
        let joined = format!("{prev}{line}");
        self.buffer.set_line(row - 1, joined)?;
        self.cursor = Cursor::at(row - 1, prev_len);
        Ok(true)
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// At the end of a line, pulls the next line up onto it.
    /// Returns `true` if the buffer changed.
    ///
    /// # Errors
    /// Returns [`BufferError`] only if the cursor was already out of bounds.
    pub fn delete_forward(&mut self) -> Result<bool, BufferError> {
        if self.past_last_line() {
            return Ok(false);
        }
        let Cursor { row, col } = self.cursor;
        let line = self.buffer.line(row)?;

        if col < line.chars().count() {
            let (start, end) = (byte_offset(line, col), byte_offset(line, col + 1));
            let joined = format!("{}{}", &line[..start], &line[end..]);
            self.buffer.set_line(row, joined)?;
            return Ok(true);
        }
        if row + 1 >= self.buffer.line_count() {
            return Ok(false);
        }

        let next = self.buffer.delete_line(row + 1)?;
        let joined = format!("{}{next}", self.buffer.line(row)?);
        self.buffer.set_line(row, joined)?;
        Ok(true)
    }

    // --- Private helpers ---

    fn past_last_line(&self) -> bool {
        self.cursor.row >= self.buffer.line_count()
    }

    /// Give a transient document its first line before inserting into it.
    fn ensure_line(&mut self) -> Result<(), BufferError> {
        if self.past_last_line() {
            self.buffer.insert_line(self.cursor.row, String::new())?;
            self.cursor.col = 0;
        }
        Ok(())
    }

    /// Splice text without line breaks at the cursor.
    fn insert_fragment(&mut self, text: &str) -> Result<(), BufferError> {
        if text.is_empty() {
            return Ok(());
        }
        self.ensure_line()?;
        let Cursor { row, col } = self.cursor;
        let line = self.buffer.line(row)?;
        let at = byte_offset(line, col);
        let spliced = format!("{}{text}{}", &line[..at], &line[at..]);
        self.buffer.set_line(row, spliced)?;
        self.cursor.col += text.chars().count();
        Ok(())
    }

    fn move_up(&mut self) -> Result<(), BufferError> {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.clamp_col()?;
        }
        Ok(())
    }

    fn move_down(&mut self) -> Result<(), BufferError> {
        if self.cursor.row + 1 < self.buffer.line_count() {
            self.cursor.row += 1;
            self.clamp_col()?;
        }
        Ok(())
    }

    fn move_left(&mut self) -> Result<(), BufferError> {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.buffer.line_len(self.cursor.row)?;
        }
        Ok(())
    }

    fn move_right(&mut self) -> Result<(), BufferError> {
        let len = self.buffer.line_len(self.cursor.row)?;
        if self.cursor.col < len {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.buffer.line_count() {
            self.cursor = Cursor::at(self.cursor.row + 1, 0);
        }
        Ok(())
    }

    fn clamp_col(&mut self) -> Result<(), BufferError> {
        let len = self.buffer.line_len(self.cursor.row)?;
        self.cursor.col = self.cursor.col.min(len);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = Cursor::at(row, col);
        self
    }
}
