//! Snippet library: `.vfl` files in a folder on disk.
//!
//! Thin filesystem CRUD. New snippets are numbered `VEX01.vfl`,
//! `VEX02.vfl`, ... continuing after the highest existing number.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

/// Extension of snippet files, without the dot.
pub const SNIPPET_EXT: &str = "vfl";

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\-. ]+$").unwrap());

static NUMBERED_SNIPPET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^VEX(\d{2})\.vfl$").unwrap());

/// Errors from snippet library operations.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Library path {0:?} does not exist")]
    MissingLibrary(PathBuf),

    #[error("{0:?} is not a valid file name")]
    InvalidName(String),

    #[error("{0:?} does not exist")]
    NotFound(PathBuf),

    #[error("{0:?} is a directory")]
    NotAFile(PathBuf),

    #[error("{0:?} already exists")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns true if `file_name` contains only word characters, hyphens,
/// dots and spaces.
pub fn is_valid_file_name(file_name: &str) -> bool {
    VALID_NAME.is_match(file_name)
}

/// Creates the next numbered snippet file in `folder`.
///
/// The folder's parent (the library root) must exist; the folder itself is
/// created on demand. Returns the new path and its stem.
pub fn create_snippet(folder: &Path) -> Result<(PathBuf, String), LibraryError> {
    let library = folder.parent().unwrap_or(folder);
    if !library.exists() {
        return Err(LibraryError::MissingLibrary(library.to_path_buf()));
    }

    let mut value: u32 = 1;
    for (path, _) in list_snippets(folder) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(captures) = NUMBERED_SNIPPET.captures(name) {
            let current: u32 = captures[1].parse().unwrap_or(0);
            if value <= current {
                value = current + 1;
            }
        }
    }

    if !folder.exists() {
        std::fs::create_dir_all(folder)?;
        info!(?folder, "snippet folder created");
    }

    let path = folder.join(format!("VEX{value:02}.{SNIPPET_EXT}"));
    if !path.exists() {
        std::fs::File::create(&path)?;
        debug!(?path, "snippet created");
    }

    let stem = file_stem(&path);
    Ok((path, stem))
}

/// Lists the snippet files in `folder` with their stems, sorted by name.
/// A missing folder lists as empty.
pub fn list_snippets(folder: &Path) -> Vec<(PathBuf, String)> {
    let Ok(entries) = std::fs::read_dir(folder) else {
        return Vec::new();
    };

    let mut snippets: Vec<(PathBuf, String)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(SNIPPET_EXT))
        .map(|path| {
            let stem = file_stem(&path);
            (path, stem)
        })
        .collect();

    snippets.sort();
    snippets
}

/// Renames a snippet, appending the `.vfl` extension when absent.
///
/// Renaming a file to its current name is a no-op. Returns the resulting
/// path and stem.
pub fn rename_snippet(path: &Path, new_name: &str) -> Result<(PathBuf, String), LibraryError> {
    let new_name = if new_name.ends_with(&format!(".{SNIPPET_EXT}")) {
        new_name.to_string()
    } else {
        format!("{new_name}.{SNIPPET_EXT}")
    };

    if !is_valid_file_name(&new_name) {
        return Err(LibraryError::InvalidName(new_name));
    }
    if !path.exists() {
        return Err(LibraryError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(LibraryError::NotAFile(path.to_path_buf()));
    }

    let new_path = path.with_file_name(&new_name);
    if new_path == path {
        debug!(?path, "rename to same name, nothing to do");
        return Ok((new_path.clone(), file_stem(&new_path)));
    }
    if new_path.exists() {
        return Err(LibraryError::AlreadyExists(new_path));
    }

    std::fs::rename(path, &new_path)?;
    debug!(from = ?path, to = ?new_path, "snippet renamed");

    let stem = file_stem(&new_path);
    Ok((new_path, stem))
}

/// Deletes a snippet file.
pub fn delete_snippet(path: &Path) -> Result<(), LibraryError> {
    if !path.exists() {
        return Err(LibraryError::NotFound(path.to_path_buf()));
    }
    std::fs::remove_file(path)?;
    debug!(?path, "snippet deleted");
    Ok(())
}

/// Reads a snippet's code; a missing file reads as empty, matching the
/// editor's display behavior.
pub fn read_snippet(path: &Path) -> Result<String, LibraryError> {
    match std::fs::read_to_string(path) {
        Ok(code) => Ok(code),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

/// Writes a snippet's code, replacing the file contents.
pub fn write_snippet(path: &Path, code: &str) -> Result<(), LibraryError> {
    std::fs::write(path, code)?;
    debug!(?path, "snippet saved");
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}
