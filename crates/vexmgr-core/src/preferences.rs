//! JSON-backed editor preferences.
//!
//! A flat key-value record persisted as a single JSON document. Missing
//! keys resolve to documented defaults via `#[serde(default)]`, a
//! malformed file resolves to the full default record, and out-of-range
//! numeric values are clamped by the loader — loading never errors.
//! Saving replaces the whole record; there is no partial update.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vexmgr_syntax::ColorScheme;

use crate::edit_assist::EditAssistPrefs;

/// Valid range for `tab_size`.
pub const TAB_SIZE_RANGE: RangeInclusive<usize> = 1..=12;

/// Valid range for `font_size`.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=30;

/// Errors that can occur while persisting preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The editor preferences record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Root folder of the snippet library
    pub library_path: String,

    /// Carry the current indent to new lines
    pub auto_indent: bool,

    /// Auto-close `{` `(` `[` and skip over typed closers
    pub insert_closing_brackets: bool,

    /// Auto-close `"` and `'` and skip over typed closers
    pub insert_closing_quotes: bool,

    /// Backspace on a whitespace-only line collapses one indent level
    pub backspace_on_tab_stop: bool,

    /// Indent width in spaces (1..=12)
    pub tab_size: usize,

    /// Editor font family
    pub font_family: String,

    /// Editor font size in points (6..=30)
    pub font_size: u32,

    /// Confirm before deleting a snippet file
    pub warn_before_deleting_a_file: bool,

    /// Token category colors
    pub color_scheme: ColorScheme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            library_path: String::new(),
            auto_indent: true,
            insert_closing_brackets: true,
            insert_closing_quotes: true,
            backspace_on_tab_stop: true,
            tab_size: 4,
            font_family: "Source Code Pro".to_string(),
            font_size: 12,
            warn_before_deleting_a_file: true,
            color_scheme: ColorScheme::default(),
        }
    }
}

impl Preferences {
    /// Loads preferences from a file, resolving every failure to defaults.
    pub fn load(path: &Path) -> Self {
        let mut prefs = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(prefs) => prefs,
                Err(err) => {
                    warn!(?path, %err, "malformed preferences, using defaults");
                    Self::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(?path, %err, "could not read preferences, using defaults");
                Self::default()
            }
        };
        prefs.clamp();
        prefs
    }

    /// Saves the whole record, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(?path, "preferences saved");
        Ok(())
    }

    /// The default preferences file location.
    pub fn default_path() -> Result<PathBuf, PreferencesError> {
        let config_dir = dirs::config_dir().ok_or(PreferencesError::NoConfigDir)?;
        Ok(config_dir.join("vexmgr").join("preferences.json"))
    }

    /// The edit-assist slice the keystroke controller consumes.
    pub fn edit_assist(&self) -> EditAssistPrefs {
        EditAssistPrefs {
            auto_indent: self.auto_indent,
            insert_closing_brackets: self.insert_closing_brackets,
            insert_closing_quotes: self.insert_closing_quotes,
            backspace_on_tab_stop: self.backspace_on_tab_stop,
            tab_size: self.tab_size,
        }
    }

    /// Clamps out-of-range numeric values into their documented ranges.
    fn clamp(&mut self) {
        self.tab_size = self
            .tab_size
            .clamp(*TAB_SIZE_RANGE.start(), *TAB_SIZE_RANGE.end());
        self.font_size = self
            .font_size
            .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let prefs = Preferences::default();
        assert!(prefs.auto_indent);
        assert!(prefs.insert_closing_brackets);
        assert!(prefs.insert_closing_quotes);
        assert!(prefs.backspace_on_tab_stop);
        assert_eq!(prefs.tab_size, 4);
        assert_eq!(prefs.font_size, 12);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.json"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        let prefs = Preferences::load(&path);
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn missing_keys_resolve_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"tab_size": 2, "auto_indent": false}"#).unwrap();
        let prefs = Preferences::load(&path);
        assert_eq!(prefs.tab_size, 2);
        assert!(!prefs.auto_indent);
        assert!(prefs.insert_closing_brackets);
        assert_eq!(prefs.color_scheme, ColorScheme::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"tab_size": 99, "font_size": 1}"#).unwrap();
        let prefs = Preferences::load(&path);
        assert_eq!(prefs.tab_size, 12);
        assert_eq!(prefs.font_size, 6);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.tab_size = 8;
        prefs.library_path = "/tmp/vex".to_string();
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn save_replaces_the_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"stale_key": true, "tab_size": 2}"#).unwrap();

        Preferences::default().save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale_key"));
    }

    #[test]
    fn edit_assist_projection() {
        let mut prefs = Preferences::default();
        prefs.tab_size = 2;
        prefs.auto_indent = false;
        let assist = prefs.edit_assist();
        assert_eq!(assist.tab_size, 2);
        assert!(!assist.auto_indent);
        assert!(assist.insert_closing_brackets);
    }
}
