//! Status classification value types.
//!
//! # Public API
//! - [`StagingState`]: how a resource is recorded in the pending commit
//! - [`Classification`]: the flags computed for one resource or grouping
//!
//! [`Classification::merge`] is the single binary step of the aggregate
//! reducer. It is commutative and associative, so any fold order over a
//! grouping's members yields the same result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Staging state of a resource or aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StagingState {
    #[default]
    NotStaged,
    Added,
    Removed,
    Modified,
}

impl StagingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StagingState::NotStaged => "NOT_STAGED",
            StagingState::Added => "ADDED",
            StagingState::Removed => "REMOVED",
            StagingState::Modified => "MODIFIED",
        }
    }

    pub fn is_staged(&self) -> bool {
        !matches!(self, StagingState::NotStaged)
    }

    /// Combine two staging states.
    ///
    /// `NotStaged` is the identity, equal states stay as they are, and any two
    /// distinct staged states collapse to `Modified`.
    pub fn merge(self, other: StagingState) -> StagingState {
        match (self, other) {
            (StagingState::NotStaged, state) | (state, StagingState::NotStaged) => state,
            (a, b) if a == b => a,
            _ => StagingState::Modified,
        }
    }
}

impl fmt::Display for StagingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flags computed for one resource, container or grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Classification {
    pub tracked: bool,
    pub ignored: bool,
    pub dirty: bool,
    pub conflicting: bool,
    #[serde(default)]
    pub assume_unchanged: bool,
    pub staging: StagingState,
}

impl Classification {
    /// A clean, tracked resource with nothing staged.
    pub fn clean() -> Self {
        Self {
            tracked: true,
            ..Default::default()
        }
    }

    /// An untracked resource.
    pub fn untracked() -> Self {
        Self::default()
    }

    /// An ignored, untracked resource.
    pub fn ignored() -> Self {
        Self {
            ignored: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    #[must_use]
    pub fn with_conflicting(mut self, conflicting: bool) -> Self {
        self.conflicting = conflicting;
        self
    }

    #[must_use]
    pub fn with_staging(mut self, staging: StagingState) -> Self {
        self.staging = staging;
        self
    }

    #[must_use]
    pub fn with_assume_unchanged(mut self, assume_unchanged: bool) -> Self {
        self.assume_unchanged = assume_unchanged;
        self
    }

    /// Reducer step: OR over tracked, dirty and conflicting; AND over ignored
    /// and assume-unchanged; staging via [`StagingState::merge`].
    #[must_use]
    pub fn merge(self, other: Classification) -> Classification {
        Classification {
            tracked: self.tracked || other.tracked,
            ignored: self.ignored && other.ignored,
            dirty: self.dirty || other.dirty,
            conflicting: self.conflicting || other.conflicting,
            assume_unchanged: self.assume_unchanged && other.assume_unchanged,
            staging: self.staging.merge(other.staging),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::with_capacity(5);
        if self.tracked {
            flags.push("tracked");
        }
        if self.ignored {
            flags.push("ignored");
        }
        if self.dirty {
            flags.push("dirty");
        }
        if self.conflicting {
            flags.push("conflicting");
        }
        if self.assume_unchanged {
            flags.push("assume-unchanged");
        }
        if flags.is_empty() {
            flags.push("untracked");
        }
        write!(f, "{} {}", flags.join(","), self.staging)
    }
}
