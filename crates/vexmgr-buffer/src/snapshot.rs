//! Immutable per-keystroke capture of the state around the cursor.

use crate::EditBuffer;

/// Everything the edit-assist rules are allowed to see.
///
/// All rules are line-local, so a snapshot is the current line, the cursor
/// offset within it, and whether a selection is active. Probing characters
/// outside the line answers `None` rather than indexing past bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    /// Text of the line the cursor is on, without its line break
    pub line: String,

    /// Cursor offset within `line`, in characters
    pub offset: usize,

    /// True when a non-empty selection is active
    pub has_selection: bool,
}

impl BufferSnapshot {
    /// Captures a snapshot from any buffer implementation.
    pub fn capture(buffer: &impl EditBuffer) -> Self {
        Self {
            line: buffer.current_line_text(),
            offset: buffer.cursor_offset_in_line(),
            has_selection: buffer.has_selection(),
        }
    }

    /// The character immediately before the cursor on this line, if any.
    pub fn char_before_cursor(&self) -> Option<char> {
        if self.offset == 0 {
            return None;
        }
        self.line.chars().nth(self.offset - 1)
    }

    /// The character at the cursor on this line, if any.
    pub fn char_at_cursor(&self) -> Option<char> {
        self.line.chars().nth(self.offset)
    }

    /// The leading whitespace of the current line.
    pub fn leading_whitespace(&self) -> String {
        self.line
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect()
    }
}
