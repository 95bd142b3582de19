use std::path::{Path, PathBuf};

/// Errors raised by [`Buffer`] primitives.
///
/// These indicate a broken caller contract: the cursor engine checks every
/// precondition before calling into the buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("line {row} is out of range (buffer has {line_count} lines)")]
    OutOfRange { row: usize, line_count: usize },
}

/// Ordered line storage with an optional backing file.
///
/// Lines never contain `\n`. A loaded buffer always has at least one line;
/// only a transient document may start with none.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Buffer {
    /// Create a buffer from text, split on `\n`.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::transient();
        buffer.load(text);
        buffer
    }

    /// Create a transient document with no lines and no backing file.
    pub const fn transient() -> Self {
        Self {
            lines: Vec::new(),
            path: None,
            dirty: false,
        }
    }

    /// Attach a backing file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The backing file, or `None` for a transient document.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<PathBuf>) {
        self.path = path;
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of a line.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] if `row >= line_count()`.
    pub fn line(&self, row: usize) -> Result<&str, BufferError> {
        self.lines
            .get(row)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(row))
    }

    /// Length of a line in characters.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] if `row >= line_count()`.
    pub fn line_len(&self, row: usize) -> Result<usize, BufferError> {
        self.line(row).map(|line| line.chars().count())
    }

    /// Iterate over all lines in document order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Replace the content of a line.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] if `row >= line_count()`.
    pub fn set_line(&mut self, row: usize, text: impl Into<String>) -> Result<(), BufferError> {
        let err = self.out_of_range(row);
        let slot = self.lines.get_mut(row).ok_or(err)?;
        *slot = text.into();
        self.dirty = true;
        Ok(())
    }

    /// Insert a new line at `row`, shifting later lines down.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] if `row > line_count()`.
    pub fn insert_line(&mut self, row: usize, text: impl Into<String>) -> Result<(), BufferError> {
        if row > self.lines.len() {
            return Err(self.out_of_range(row));
        }
        self.lines.insert(row, text.into());
        self.dirty = true;
        Ok(())
    }

    /// Remove the line at `row`, shifting later lines up.
    ///
    /// Returns the removed text.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] if `row >= line_count()`.
    pub fn delete_line(&mut self, row: usize) -> Result<String, BufferError> {
        if row >= self.lines.len() {
            return Err(self.out_of_range(row));
        }
        self.dirty = true;
        Ok(self.lines.remove(row))
    }

    /// Replace the entire content with `text` split on `\n`.
    ///
    /// Always leaves at least one line. `\r` is kept as line content so that
    /// [`serialize`](Self::serialize) reproduces the input exactly.
    pub fn load(&mut self, text: &str) {
        self.lines = text.split('\n').map(ToOwned::to_owned).collect();
        self.dirty = false;
    }

    /// Join all lines with `\n`.
    pub fn serialize(&self) -> String {
        self.lines.join("\n")
    }

    fn out_of_range(&self, row: usize) -> BufferError {
        BufferError::OutOfRange {
            row,
            line_count: self.lines.len(),
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::transient()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &format_args!("{} lines", self.lines.len()))
            .field("path", &self.path)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Byte index of character offset `col` in `line`, clamped to the line end.
pub(crate) fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}
