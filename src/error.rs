//! Unified error types for bookmark-nav
//!
//! Navigation itself never fails; these errors cover loading bookmarks,
//! configuration and keymaps.

use std::path::PathBuf;

/// Unified error type for bookmark-nav operations
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// I/O errors (reading bookmark exports, config files, log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed bookmark JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Keymap entries that cannot be parsed
    #[error("Keymap error: {key} - {reason}")]
    Keymap { key: String, reason: String },

    /// Bookmark tree errors (missing root, unknown folder)
    #[error("Bookmarks error: {0}")]
    Bookmarks(String),

    /// Bookmark export file that cannot be used
    #[error("Bookmarks file error: {path} - {reason}")]
    BookmarksFile { path: PathBuf, reason: String },

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using NavError
pub type Result<T> = std::result::Result<T, NavError>;

impl NavError {
    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Keymap error
    pub fn keymap(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Keymap {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a Bookmarks error
    pub fn bookmarks(msg: impl Into<String>) -> Self {
        Self::Bookmarks(msg.into())
    }

    /// Create a BookmarksFile error
    pub fn bookmarks_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::BookmarksFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
