//! Git repository access: builds snapshots from the index and status.
//!
//! This module wraps `git2` to produce the immutable inputs of a decoration
//! pass through [`GitRepo::read_state`]:
//! - a [`Snapshot`] of staged, unstaged, untracked, ignored and conflicting paths
//! - a [`LeafSet`] of every known leaf (index entries plus untracked and ignored entries)
//!
//! Nothing here is cached; every call reads the repository again.

use crate::core::{
    error::{GitDecoratorError, Result},
    repo_path::RepoPath,
    resources::LeafSet,
    snapshot::{ChangeSet, Snapshot},
};
use git2::{IndexEntryFlag, Repository, Status, StatusOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Snapshot and leaf set read together, for one decoration pass.
#[derive(Debug, Clone)]
pub struct RepositoryState {
    pub snapshot: Arc<Snapshot>,
    pub leaves: Arc<LeafSet>,
}

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

/// Status flag -> snapshot set, checked in this order for every entry.
const STATUS_SETS: [(Status, ChangeSet); 8] = [
    (Status::INDEX_NEW, ChangeSet::Added),
    (Status::INDEX_DELETED, ChangeSet::Removed),
    (
        Status::INDEX_MODIFIED
            .union(Status::INDEX_TYPECHANGE)
            .union(Status::INDEX_RENAMED),
        ChangeSet::Changed,
    ),
    (Status::WT_DELETED, ChangeSet::Missing),
    (
        Status::WT_MODIFIED
            .union(Status::WT_TYPECHANGE)
            .union(Status::WT_RENAMED),
        ChangeSet::Modified,
    ),
    (Status::WT_NEW, ChangeSet::Untracked),
    (Status::IGNORED, ChangeSet::Ignored),
    (Status::CONFLICTED, ChangeSet::Conflicting),
];

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        let workdir = repo.workdir().ok_or(GitDecoratorError::BareRepository)?;
        let workdir = std::fs::canonicalize(workdir)?;
        Ok(GitRepo { repo, workdir })
    }

    /// Canonical work-tree root.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Name shown for the repository in labels: the work-tree directory name.
    pub fn repository_name(&self) -> String {
        self.workdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Current branch, or `None` when HEAD is unborn or detached.
    pub fn current_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        if head.is_branch() {
            head.shorthand().map(str::to_string)
        } else {
            None
        }
    }

    /// Read the index and status once and freeze them.
    pub fn read_state(&self) -> Result<RepositoryState> {
        let mut builder = Snapshot::builder(&self.workdir);
        let mut leaves = LeafSet::new();

        let mut index = self.repo.index()?;
        index.read(false)?;
        for entry in index.iter() {
            let path = std::str::from_utf8(&entry.path)
                .map_err(|_| GitDecoratorError::InvalidUtf8Path)?;
            let path = RepoPath::parse(path)?;
            if entry.flags & IndexEntryFlag::VALID.bits() != 0 {
                builder.insert(ChangeSet::AssumeUnchanged, path.clone());
            }
            leaves.insert(path);
        }

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(true)
            .recurse_ignored_dirs(false)
            .include_unmodified(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        for entry in statuses.iter() {
            let path = entry.path().ok_or(GitDecoratorError::InvalidUtf8Path)?;
            let path = RepoPath::parse(path)?;
            let flags = entry.status();

            for (flag, set) in STATUS_SETS {
                if flags.intersects(flag) {
                    builder.insert(set, path.clone());
                }
            }
            if flags.intersects(Status::WT_NEW | Status::IGNORED) {
                leaves.insert(path);
            }
        }

        let snapshot = builder.build()?;
        log::debug!(
            "Read repository state: {} snapshot entries, {} leaves",
            snapshot.len(),
            leaves.len()
        );

        Ok(RepositoryState {
            snapshot: Arc::new(snapshot),
            leaves: Arc::new(leaves),
        })
    }
}
