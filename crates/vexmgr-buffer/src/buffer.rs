//! Rope-backed text buffer with a single cursor and optional selection.

use ropey::Rope;

use crate::{BufferError, BufferResult, EditBuffer};

/// An in-process text buffer for snippet editing.
///
/// The cursor is a character index into the rope. A selection is the range
/// between `anchor` and `cursor`; the anchor may sit on either side.
///
/// # Thread Safety
///
/// `SnippetBuffer` is `Send` but is meant to be owned by a single editing
/// context; keystrokes arrive one at a time on the event thread.
#[derive(Debug, Clone)]
pub struct SnippetBuffer {
    rope: Rope,
    cursor: usize,
    anchor: Option<usize>,
}

impl SnippetBuffer {
    /// Creates an empty buffer with the cursor at the start.
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
            anchor: None,
        }
    }

    /// Total length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The full buffer contents.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Moves the cursor to an absolute character index.
    pub fn set_cursor(&mut self, index: usize) -> BufferResult<()> {
        if index > self.rope.len_chars() {
            return Err(BufferError::InvalidCharIndex(index));
        }
        self.cursor = index;
        self.anchor = None;
        Ok(())
    }

    /// Selects the character range `start..end`, leaving the cursor at `end`.
    pub fn select(&mut self, start: usize, end: usize) -> BufferResult<()> {
        if start > end {
            return Err(BufferError::InvalidSelection { start, end });
        }
        if end > self.rope.len_chars() {
            return Err(BufferError::InvalidCharIndex(end));
        }
        self.anchor = Some(start);
        self.cursor = end;
        Ok(())
    }

    /// The selection as an ordered character range, if non-empty.
    fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    fn delete_selection(&mut self) -> bool {
        if let Some((start, end)) = self.selection_range() {
            self.rope.remove(start..end);
            self.cursor = start;
            self.anchor = None;
            true
        } else {
            false
        }
    }

    fn line_bounds(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        let mut end = start + slice.len_chars();
        // Exclude the line break from the line's own extent.
        if slice.len_chars() > 0 && slice.char(slice.len_chars() - 1) == '\n' {
            end -= 1;
        }
        (start, end)
    }
}

impl Default for SnippetBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for SnippetBuffer {
    fn from(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let cursor = rope.len_chars();
        Self {
            rope,
            cursor,
            anchor: None,
        }
    }
}

impl EditBuffer for SnippetBuffer {
    fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
    }

    fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, self.rope.len_chars() as isize) as usize;
        self.anchor = None;
    }

    fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        if self.cursor > 0 {
            self.rope.remove(self.cursor - 1..self.cursor);
            self.cursor -= 1;
        }
    }

    fn current_line_text(&self) -> String {
        let (start, end) = self.line_bounds();
        self.rope.slice(start..end).to_string()
    }

    fn cursor_offset_in_line(&self) -> usize {
        let (start, _) = self.line_bounds();
        self.cursor - start
    }

    fn cursor_offset(&self) -> usize {
        self.cursor
    }

    fn selection_text(&self) -> String {
        match self.selection_range() {
            Some((start, end)) => self.rope.slice(start..end).to_string(),
            None => String::new(),
        }
    }

    fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }
}
