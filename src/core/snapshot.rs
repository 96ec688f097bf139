//! Immutable index/work-tree status snapshot.
//!
//! A [`Snapshot`] is produced wholesale on every refresh (see
//! [`GitRepo::read_state`](crate::core::git::GitRepo::read_state)) and never mutated
//! afterwards. Readers hold one reference for a whole decoration pass, so a
//! newer snapshot never leaks into a pass that already started.
//!
//! # Public API
//! - [`Snapshot`]: the frozen path sets plus the work-tree root
//! - [`SnapshotBuilder`]: collects paths and validates exclusivity on build
//! - [`ChangeSet`]: names of the individual sets
//!
//! All sets are ordered so that "everything beneath a container" is a single
//! range scan rather than a walk over the whole set.

use crate::core::error::{GitDecoratorError, Result};
use crate::core::repo_path::RepoPath;
use std::collections::BTreeSet;
use std::ops::Bound;
use std::path::{Path, PathBuf};

/// The individual path sets of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSet {
    /// New in the index relative to HEAD
    Added,
    /// Index content differs from HEAD
    Changed,
    /// Deleted from the index relative to HEAD
    Removed,
    /// Work tree content differs from the index
    Modified,
    /// In the index but gone from the work tree
    Missing,
    Untracked,
    Ignored,
    Conflicting,
    AssumeUnchanged,
}

impl ChangeSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeSet::Added => "added",
            ChangeSet::Changed => "changed",
            ChangeSet::Removed => "removed",
            ChangeSet::Modified => "modified",
            ChangeSet::Missing => "missing",
            ChangeSet::Untracked => "untracked",
            ChangeSet::Ignored => "ignored",
            ChangeSet::Conflicting => "conflicting",
            ChangeSet::AssumeUnchanged => "assume-unchanged",
        }
    }
}

/// Staged (index vs HEAD) sets.
pub(crate) const INDEX_CHANGES: [ChangeSet; 3] =
    [ChangeSet::Added, ChangeSet::Changed, ChangeSet::Removed];

/// Unstaged (work tree vs index) sets.
pub(crate) const WORKTREE_CHANGES: [ChangeSet; 2] = [ChangeSet::Modified, ChangeSet::Missing];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    root: PathBuf,
    added: BTreeSet<RepoPath>,
    changed: BTreeSet<RepoPath>,
    removed: BTreeSet<RepoPath>,
    modified: BTreeSet<RepoPath>,
    missing: BTreeSet<RepoPath>,
    untracked: BTreeSet<RepoPath>,
    ignored: BTreeSet<RepoPath>,
    conflicting: BTreeSet<RepoPath>,
    assume_unchanged: BTreeSet<RepoPath>,
}

impl Snapshot {
    pub fn builder(root: impl Into<PathBuf>) -> SnapshotBuilder {
        SnapshotBuilder {
            snapshot: Snapshot {
                root: root.into(),
                ..Default::default()
            },
        }
    }

    /// A snapshot with no changes at all.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Snapshot {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Work-tree root the snapshot was taken of.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a workspace path (absolute, or relative to the root) to a [`RepoPath`].
    pub fn repo_path(&self, path: impl AsRef<Path>) -> Result<RepoPath> {
        RepoPath::from_workspace(&self.root, path.as_ref())
    }

    pub fn set(&self, which: ChangeSet) -> &BTreeSet<RepoPath> {
        match which {
            ChangeSet::Added => &self.added,
            ChangeSet::Changed => &self.changed,
            ChangeSet::Removed => &self.removed,
            ChangeSet::Modified => &self.modified,
            ChangeSet::Missing => &self.missing,
            ChangeSet::Untracked => &self.untracked,
            ChangeSet::Ignored => &self.ignored,
            ChangeSet::Conflicting => &self.conflicting,
            ChangeSet::AssumeUnchanged => &self.assume_unchanged,
        }
    }

    /// Exact membership.
    pub fn has(&self, which: ChangeSet, path: &RepoPath) -> bool {
        self.set(which).contains(path)
    }

    /// True when some entry of the set is `path` itself or one of its ancestors.
    ///
    /// Untracked and ignored directories are reported as a single entry, so
    /// membership for those sets is decided by containment.
    pub fn covers(&self, which: ChangeSet, path: &RepoPath) -> bool {
        let set = self.set(which);
        if set.contains(&RepoPath::root()) || set.contains(path) {
            return true;
        }
        let raw = path.as_str();
        raw.match_indices('/').any(|(at, _)| {
            RepoPath::parse(&raw[..at])
                .map(|ancestor| set.contains(&ancestor))
                .unwrap_or(false)
        })
    }

    /// True when some entry of the set is `container` or lies beneath it.
    pub fn any_beneath(&self, which: ChangeSet, container: &RepoPath) -> bool {
        self.beneath(which, container).next().is_some()
    }

    /// Every entry of the set contained by `container`, in path order.
    pub fn beneath<'a>(
        &'a self,
        which: ChangeSet,
        container: &RepoPath,
    ) -> Box<dyn Iterator<Item = &'a RepoPath> + 'a> {
        let set = self.set(which);
        if container.is_root() {
            return Box::new(set.iter());
        }
        let own = set.get(container).into_iter();
        let (low, high) = container.descendant_range();
        let descendants = set.range((Bound::Included(low), Bound::Excluded(high)));
        Box::new(own.chain(descendants))
    }

    /// True when the path shows up in any staged or unstaged change set.
    pub fn is_listed(&self, path: &RepoPath) -> bool {
        INDEX_CHANGES
            .iter()
            .chain(WORKTREE_CHANGES.iter())
            .any(|&which| self.has(which, path))
    }

    /// Total number of entries across all sets.
    pub fn len(&self) -> usize {
        ALL_SETS.iter().map(|&which| self.set(which).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const ALL_SETS: [ChangeSet; 9] = [
    ChangeSet::Added,
    ChangeSet::Changed,
    ChangeSet::Removed,
    ChangeSet::Modified,
    ChangeSet::Missing,
    ChangeSet::Untracked,
    ChangeSet::Ignored,
    ChangeSet::Conflicting,
    ChangeSet::AssumeUnchanged,
];

/// Collects paths into a [`Snapshot`].
///
/// `build` checks the exclusivity rules: at most one of added/changed/removed,
/// at most one of modified/missing, and a removed path is neither modified
/// nor missing.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn insert(&mut self, which: ChangeSet, path: RepoPath) -> &mut Self {
        let set = match which {
            ChangeSet::Added => &mut self.snapshot.added,
            ChangeSet::Changed => &mut self.snapshot.changed,
            ChangeSet::Removed => &mut self.snapshot.removed,
            ChangeSet::Modified => &mut self.snapshot.modified,
            ChangeSet::Missing => &mut self.snapshot.missing,
            ChangeSet::Untracked => &mut self.snapshot.untracked,
            ChangeSet::Ignored => &mut self.snapshot.ignored,
            ChangeSet::Conflicting => &mut self.snapshot.conflicting,
            ChangeSet::AssumeUnchanged => &mut self.snapshot.assume_unchanged,
        };
        set.insert(path);
        self
    }

    /// Parse `path` and insert it; convenient for hand-built snapshots.
    pub fn with(mut self, which: ChangeSet, path: &str) -> Result<Self> {
        self.insert(which, RepoPath::parse(path)?);
        Ok(self)
    }

    pub fn build(self) -> Result<Snapshot> {
        let snapshot = self.snapshot;

        check_exclusive(&snapshot, &INDEX_CHANGES)?;
        check_exclusive(&snapshot, &WORKTREE_CHANGES)?;
        check_exclusive(&snapshot, &[ChangeSet::Removed, ChangeSet::Modified])?;
        check_exclusive(&snapshot, &[ChangeSet::Removed, ChangeSet::Missing])?;

        log::debug!(
            "Built snapshot of {} with {} entries",
            snapshot.root.display(),
            snapshot.len()
        );
        Ok(snapshot)
    }
}

fn check_exclusive(snapshot: &Snapshot, sets: &[ChangeSet]) -> Result<()> {
    for (i, &first) in sets.iter().enumerate() {
        for &second in &sets[i + 1..] {
            let (small, large) = if snapshot.set(first).len() <= snapshot.set(second).len() {
                (first, second)
            } else {
                (second, first)
            };
            if let Some(path) = snapshot
                .set(small)
                .iter()
                .find(|path| snapshot.has(large, path))
            {
                return Err(GitDecoratorError::overlapping_change(
                    path.as_str(),
                    first.as_str(),
                    second.as_str(),
                ));
            }
        }
    }
    Ok(())
}
