//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitDecoratorError`] which covers every failure mode of
//! git-decorator. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`GitDecoratorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitDecoratorError>`
//!
//! # Error Categories
//! - **Decoration contract**: invalid paths, empty groupings, inconsistent snapshots
//! - **Git operations**: Repository not found, git2 library errors
//! - **Configuration**: config directory lookup, read, parse and write failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-decorator
#[derive(Error, Debug)]
pub enum GitDecoratorError {
    // Decoration contract errors
    #[error("Path is outside the repository: {path}")]
    InvalidPath { path: String },

    #[error("Grouping '{name}' has no members")]
    EmptyGrouping { name: String },

    #[error("Path '{path}' is reported as both {first} and {second}")]
    OverlappingChange {
        path: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("{failed} path(s) could not be decorated")]
    DecorationFailed { failed: usize },

    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Config errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitDecoratorError
pub type Result<T> = std::result::Result<T, GitDecoratorError>;

impl GitDecoratorError {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create an empty grouping error
    pub fn empty_grouping(name: impl Into<String>) -> Self {
        Self::EmptyGrouping { name: name.into() }
    }

    /// Create an overlapping change error for a path listed in two exclusive sets
    pub fn overlapping_change(
        path: impl Into<String>,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::OverlappingChange {
            path: path.into(),
            first,
            second,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
