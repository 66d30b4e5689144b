//! # Vexmgr Buffer
//!
//! Text buffer and cursor abstraction for the VEX snippet editor.
//!
//! The edit-assist layer never depends on a concrete text widget. It talks
//! to an [`EditBuffer`] — the narrow interface a host text component must
//! provide — and makes its decisions from a [`BufferSnapshot`], an immutable
//! capture of the state around the cursor at the moment of a keystroke.
//!
//! [`SnippetBuffer`] is the in-process implementation backed by a rope,
//! used by tests and the terminal preview.

mod buffer;
mod snapshot;

pub use buffer::SnippetBuffer;
pub use snapshot::BufferSnapshot;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Selection is invalid: start {start} is after end {end}")]
    InvalidSelection { start: usize, end: usize },
}

/// The text component interface the editor core mutates.
///
/// A host widget (or [`SnippetBuffer`] in tests) exposes exactly these
/// operations. The edit-assist controller owns the buffer only for the
/// duration of one keystroke and never retains it between keystrokes.
pub trait EditBuffer {
    /// Inserts text at the cursor, replacing the selection if one exists.
    fn insert_text(&mut self, text: &str);

    /// Moves the cursor by `delta` characters, clamped to buffer bounds.
    /// Clears any selection.
    fn move_cursor(&mut self, delta: isize);

    /// Deletes one character backward from the cursor, or the selection
    /// if one exists. At the start of the buffer this is a no-op.
    fn delete_backward(&mut self);

    /// The text of the line the cursor is on, without its line break.
    fn current_line_text(&self) -> String;

    /// Cursor offset within the current line, in characters.
    fn cursor_offset_in_line(&self) -> usize;

    /// Global cursor offset, in characters from the start of the buffer.
    fn cursor_offset(&self) -> usize;

    /// The selected text, empty when nothing is selected.
    fn selection_text(&self) -> String;

    /// Returns true if a non-empty selection is active.
    fn has_selection(&self) -> bool;
}
