//! Keystroke edit-assist: auto-indent, delimiter pairing, tab expansion
//! and smart backspace.
//!
//! ## Learning: Decisions as Data
//!
//! The controller is a pure function from `(key, snapshot, prefs)` to an
//! [`Action`]. It never touches a widget: `Handled` carries the buffer
//! mutations to perform instead of the default insertion, `PassThrough`
//! lets the host's default behavior run. That keeps every rule testable
//! without a UI toolkit and decouples the core from any event class
//! hierarchy.

use vexmgr_buffer::{BufferSnapshot, EditBuffer};

/// A logical key-input event, before default text insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Tab,
    Enter,
    Backspace,
    Char(char),
}

/// The edit-assist slice of the editor preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditAssistPrefs {
    pub auto_indent: bool,
    pub insert_closing_brackets: bool,
    pub insert_closing_quotes: bool,
    pub backspace_on_tab_stop: bool,
    /// Validated by the preferences layer (1..=12); trusted here.
    pub tab_size: usize,
}

impl Default for EditAssistPrefs {
    fn default() -> Self {
        Self {
            auto_indent: true,
            insert_closing_brackets: true,
            insert_closing_quotes: true,
            backspace_on_tab_stop: true,
            tab_size: 4,
        }
    }
}

/// A single buffer mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    InsertText(String),
    MoveCursor(isize),
    DeleteBackward(usize),
}

/// Outcome of a keystroke decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Suppress default insertion and perform these mutations instead.
    Handled(Vec<Mutation>),
    /// Let the host's default behavior proceed.
    PassThrough,
}

/// Decides what to do with one keystroke.
///
/// First matching rule wins. With a non-empty selection every custom rule
/// is skipped — smart-editing transformations never clobber a selection.
pub fn decide(key: KeyInput, snap: &BufferSnapshot, prefs: &EditAssistPrefs) -> Action {
    if snap.has_selection {
        return Action::PassThrough;
    }

    match key {
        KeyInput::Tab => Action::Handled(vec![Mutation::InsertText(indent_unit(prefs))]),

        KeyInput::Backspace => decide_backspace(snap, prefs),

        KeyInput::Enter => decide_enter(snap, prefs),

        KeyInput::Char(open @ ('{' | '(' | '[')) if prefs.insert_closing_brackets => {
            let close = closing_for(open);
            Action::Handled(vec![
                Mutation::InsertText(format!("{open}{close}")),
                Mutation::MoveCursor(-1),
            ])
        }

        KeyInput::Char(close @ ('}' | ')' | ']')) if prefs.insert_closing_brackets => {
            skip_over(snap, close)
        }

        KeyInput::Char(quote @ ('"' | '\'')) if prefs.insert_closing_quotes => {
            if snap.char_at_cursor() == Some(quote) {
                Action::Handled(vec![Mutation::MoveCursor(1)])
            } else {
                Action::Handled(vec![
                    Mutation::InsertText(format!("{quote}{quote}")),
                    Mutation::MoveCursor(-1),
                ])
            }
        }

        _ => Action::PassThrough,
    }
}

/// Applies a decision to a buffer. Returns true when the event was
/// handled, i.e. default insertion must be suppressed.
pub fn apply(action: &Action, buffer: &mut impl EditBuffer) -> bool {
    let Action::Handled(mutations) = action else {
        return false;
    };
    for mutation in mutations {
        match mutation {
            Mutation::InsertText(text) => buffer.insert_text(text),
            Mutation::MoveCursor(delta) => buffer.move_cursor(*delta),
            Mutation::DeleteBackward(count) => {
                for _ in 0..*count {
                    buffer.delete_backward();
                }
            }
        }
    }
    true
}

/// Collapse one indent level when backspacing at the end of a
/// whitespace-only line.
fn decide_backspace(snap: &BufferSnapshot, prefs: &EditAssistPrefs) -> Action {
    let line_len = snap.line.chars().count();
    let on_tab_stop = prefs.backspace_on_tab_stop
        && line_len > 0
        && snap.line.trim().is_empty()
        && snap.offset == line_len;

    if !on_tab_stop {
        return Action::PassThrough;
    }

    let remainder = line_len % prefs.tab_size;
    let count = if remainder == 0 {
        prefs.tab_size
    } else {
        remainder
    };
    Action::Handled(vec![Mutation::DeleteBackward(count)])
}

/// Carry the current indent to the next line; after an opening delimiter,
/// expand a block with the closing line dedented back to the original
/// indent and the cursor on an indented blank line between them.
fn decide_enter(snap: &BufferSnapshot, prefs: &EditAssistPrefs) -> Action {
    if !prefs.auto_indent {
        return Action::PassThrough;
    }

    let leading = snap.leading_whitespace();
    if matches!(snap.char_before_cursor(), Some('{' | '(' | '[')) {
        let indent = indent_unit(prefs);
        let back = -(1 + leading.chars().count() as isize);
        Action::Handled(vec![
            Mutation::InsertText(format!("\n{leading}{indent}\n{leading}")),
            Mutation::MoveCursor(back),
        ])
    } else {
        Action::Handled(vec![Mutation::InsertText(format!("\n{leading}"))])
    }
}

fn skip_over(snap: &BufferSnapshot, close: char) -> Action {
    if snap.char_at_cursor() == Some(close) {
        Action::Handled(vec![Mutation::MoveCursor(1)])
    } else {
        Action::PassThrough
    }
}

fn indent_unit(prefs: &EditAssistPrefs) -> String {
    " ".repeat(prefs.tab_size)
}

fn closing_for(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        '[' => ']',
        _ => unreachable!("not an opening delimiter: {open}"),
    }
}
