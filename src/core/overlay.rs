//! Overlay selection: one visual indicator per classification.
//!
//! # Public API
//! - [`OverlayIdentity`]: the closed set of overlay images
//! - [`OverlayPreferences`]: per-overlay enable switches
//! - [`select_overlay`]: precedence with every overlay enabled
//! - [`select_overlay_with`]: precedence honoring preferences
//!
//! # Precedence (first match wins)
//! 1. conflicting -> `CONFLICT`
//! 2. dirty -> `DIRTY`
//! 3. staged added / removed / modified -> `STAGED_ADDED` / `STAGED_REMOVED` / `STAGED`
//! 4. not tracked -> `NONE` for aggregate roots, `UNTRACKED` otherwise
//! 5. ignored -> `IGNORED`
//! 6. assume-unchanged -> `ASSUME_UNCHANGED`
//! 7. otherwise `TRACKED`

use crate::core::classification::{Classification, StagingState};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverlayIdentity {
    None,
    Untracked,
    Tracked,
    Ignored,
    Dirty,
    Conflict,
    Staged,
    StagedAdded,
    StagedRemoved,
    AssumeUnchanged,
}

impl OverlayIdentity {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayIdentity::None => "NONE",
            OverlayIdentity::Untracked => "UNTRACKED",
            OverlayIdentity::Tracked => "TRACKED",
            OverlayIdentity::Ignored => "IGNORED",
            OverlayIdentity::Dirty => "DIRTY",
            OverlayIdentity::Conflict => "CONFLICT",
            OverlayIdentity::Staged => "STAGED",
            OverlayIdentity::StagedAdded => "STAGED_ADDED",
            OverlayIdentity::StagedRemoved => "STAGED_REMOVED",
            OverlayIdentity::AssumeUnchanged => "ASSUME_UNCHANGED",
        }
    }

    /// Short marker used in terminal output, `git status` style where one exists.
    pub fn symbol(&self) -> &'static str {
        match self {
            OverlayIdentity::None => "  ",
            OverlayIdentity::Untracked => "??",
            OverlayIdentity::Tracked => "  ",
            OverlayIdentity::Ignored => "!!",
            OverlayIdentity::Dirty => " M",
            OverlayIdentity::Conflict => "UU",
            OverlayIdentity::Staged => "M ",
            OverlayIdentity::StagedAdded => "A ",
            OverlayIdentity::StagedRemoved => "D ",
            OverlayIdentity::AssumeUnchanged => "h ",
        }
    }
}

impl fmt::Display for OverlayIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which overlays may be shown at all.
///
/// A disabled overlay's rule is skipped, so the next matching rule decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayPreferences {
    pub show_conflicts: bool,
    pub show_dirty: bool,
    pub show_staged: bool,
    pub show_untracked: bool,
    pub show_ignored: bool,
    pub show_assume_unchanged: bool,
    pub show_tracked: bool,
}

impl Default for OverlayPreferences {
    fn default() -> Self {
        Self {
            show_conflicts: true,
            show_dirty: true,
            show_staged: true,
            show_untracked: true,
            show_ignored: true,
            show_assume_unchanged: true,
            show_tracked: true,
        }
    }
}

/// Select the overlay with every overlay enabled.
///
/// Untracked outranks ignored, so a file inside an ignored directory shows as
/// untracked. `Ignored` appears for tracked files matched by an ignore rule,
/// or when `show_untracked` is off (see [`select_overlay_with`]).
///
/// ```
/// use git_decorator::{select_overlay, Classification, OverlayIdentity};
///
/// // e.g. target/debug/app under an ignored target/
/// let build_output = Classification::ignored();
/// assert_eq!(select_overlay(&build_output, false), OverlayIdentity::Untracked);
///
/// let tracked_but_ignored = Classification { ignored: true, ..Classification::clean() };
/// assert_eq!(select_overlay(&tracked_but_ignored, false), OverlayIdentity::Ignored);
/// ```
pub fn select_overlay(classification: &Classification, is_aggregate_root: bool) -> OverlayIdentity {
    select_overlay_with(
        classification,
        is_aggregate_root,
        &OverlayPreferences::default(),
    )
}

/// Select the overlay, skipping rules whose overlay is disabled.
///
/// Returns [`OverlayIdentity::None`] when no enabled rule matches.
pub fn select_overlay_with(
    classification: &Classification,
    is_aggregate_root: bool,
    preferences: &OverlayPreferences,
) -> OverlayIdentity {
    let c = classification;

    if c.conflicting && preferences.show_conflicts {
        return OverlayIdentity::Conflict;
    }
    if c.dirty && preferences.show_dirty {
        return OverlayIdentity::Dirty;
    }
    if preferences.show_staged {
        match c.staging {
            StagingState::Added => return OverlayIdentity::StagedAdded,
            StagingState::Removed => return OverlayIdentity::StagedRemoved,
            StagingState::Modified => return OverlayIdentity::Staged,
            StagingState::NotStaged => {}
        }
    }
    if !c.tracked {
        if is_aggregate_root {
            return OverlayIdentity::None;
        }
        if preferences.show_untracked {
            return OverlayIdentity::Untracked;
        }
        if !(c.ignored && preferences.show_ignored) {
            return OverlayIdentity::None;
        }
    }
    if c.ignored {
        return if preferences.show_ignored {
            OverlayIdentity::Ignored
        } else {
            OverlayIdentity::None
        };
    }
    if c.assume_unchanged && preferences.show_assume_unchanged {
        return OverlayIdentity::AssumeUnchanged;
    }
    if c.tracked && preferences.show_tracked {
        return OverlayIdentity::Tracked;
    }
    OverlayIdentity::None
}
