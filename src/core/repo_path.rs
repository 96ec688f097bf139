//! Repository-relative paths with segment-exact containment.
//!
//! [`RepoPath`] is the key type of every snapshot set. It is always stored in
//! normalized form: forward slashes, no leading or trailing slash, no `.` or
//! empty segments, never a `..` segment. The empty path is the repository root.
//!
//! Containment is decided on segment boundaries, never by plain string prefix:
//! `Folder` does not contain `Folder2`.

use crate::core::error::{GitDecoratorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoPath(String);

impl RepoPath {
    /// The repository root, which contains every path.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and normalize a repository-relative path.
    ///
    /// Backslashes are accepted as separators. Absolute paths and paths with a
    /// `..` segment are rejected with [`GitDecoratorError::InvalidPath`].
    /// A leading `x:` is a drive only on Windows; elsewhere `a:notes.txt` is a
    /// plain file name.
    pub fn parse(input: &str) -> Result<Self> {
        let unified = input.replace('\\', "/");
        if unified.starts_with('/') || (cfg!(windows) && has_drive_prefix(&unified)) {
            return Err(GitDecoratorError::invalid_path(input));
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(GitDecoratorError::invalid_path(input)),
                other => segments.push(other),
            }
        }

        Ok(Self(segments.join("/")))
    }

    /// Relativize `path` against the work-tree `root`.
    ///
    /// Relative paths are taken as already repository-relative. Absolute paths
    /// must live under `root`.
    pub fn from_workspace(root: &Path, path: &Path) -> Result<Self> {
        let display = || path.to_string_lossy().into_owned();

        let relative = if path.is_absolute() {
            path.strip_prefix(root)
                .map_err(|_| GitDecoratorError::invalid_path(display()))?
        } else {
            path
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or(GitDecoratorError::InvalidUtf8Path)?;
                    segments.push(segment);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(GitDecoratorError::invalid_path(display()));
                }
            }
        }

        Self::parse(&segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last path segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_root() {
            None
        } else {
            self.0.rsplit('/').next()
        }
    }

    /// True when `other` is this path or lies beneath it.
    pub fn contains(&self, other: &RepoPath) -> bool {
        if self.is_root() || self.0 == other.0 {
            return true;
        }
        other.0.len() > self.0.len()
            && other.0.starts_with(&self.0)
            && other.0.as_bytes()[self.0.len()] == b'/'
    }

    /// Half-open range `[low, high)` holding every strict descendant.
    ///
    /// Descendants of `p` sort between `p/` and `p0` because `'0'` is the byte
    /// right after `'/'`.
    pub(crate) fn descendant_range(&self) -> (RepoPath, RepoPath) {
        (
            RepoPath(format!("{}/", self.0)),
            RepoPath(format!("{}0", self.0)),
        )
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<String> for RepoPath {
    type Error = GitDecoratorError;

    fn try_from(value: String) -> Result<Self> {
        RepoPath::parse(&value)
    }
}

impl TryFrom<&str> for RepoPath {
    type Error = GitDecoratorError;

    fn try_from(value: &str) -> Result<Self> {
        RepoPath::parse(value)
    }
}

impl From<RepoPath> for String {
    fn from(path: RepoPath) -> Self {
        path.0
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
