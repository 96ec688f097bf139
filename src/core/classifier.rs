//! Path classifier: snapshot + path + kind -> [`Classification`].
//!
//! Leaves are answered by set membership. Containers are answered by range
//! scans over the snapshot sets (everything beneath the container path) plus
//! one question to the [`ResourceTree`] about clean tracked leaves, which the
//! snapshot does not list.

use crate::core::classification::{Classification, StagingState};
use crate::core::error::{GitDecoratorError, Result};
use crate::core::repo_path::RepoPath;
use crate::core::resources::{ResourceKind, ResourceTree};
use crate::core::snapshot::{ChangeSet, Snapshot, INDEX_CHANGES, WORKTREE_CHANGES};
use std::path::Path;

/// Classify a workspace path.
///
/// `path` may be relative to the repository root or absolute; an absolute
/// path outside the snapshot root fails with [`GitDecoratorError::InvalidPath`].
/// Aggregate roots have no path of their own and are rejected as well; use
/// [`decorate_grouping`](crate::core::decorator::decorate_grouping) for them.
pub fn classify(
    snapshot: &Snapshot,
    tree: &dyn ResourceTree,
    path: impl AsRef<Path>,
    kind: ResourceKind,
) -> Result<Classification> {
    let repo_path = snapshot.repo_path(path.as_ref())?;
    classify_repo_path(snapshot, tree, &repo_path, kind)
}

/// Classify an already normalized [`RepoPath`].
pub fn classify_repo_path(
    snapshot: &Snapshot,
    tree: &dyn ResourceTree,
    path: &RepoPath,
    kind: ResourceKind,
) -> Result<Classification> {
    let classification = match kind {
        ResourceKind::Leaf => classify_leaf(snapshot, path),
        ResourceKind::Container => classify_container(snapshot, tree, path),
        ResourceKind::AggregateRoot => {
            return Err(GitDecoratorError::invalid_path(path.as_str()));
        }
    };
    log::debug!("classify {} ({}): {}", path, kind.as_str(), classification);
    Ok(classification)
}

fn classify_leaf(snapshot: &Snapshot, path: &RepoPath) -> Classification {
    let listed = snapshot.is_listed(path);
    let untracked = snapshot.covers(ChangeSet::Untracked, path);
    let ignored = snapshot.covers(ChangeSet::Ignored, path);

    let staging = if snapshot.has(ChangeSet::Added, path) {
        StagingState::Added
    } else if snapshot.has(ChangeSet::Removed, path) {
        StagingState::Removed
    } else if snapshot.has(ChangeSet::Changed, path) {
        StagingState::Modified
    } else {
        StagingState::NotStaged
    };

    Classification {
        tracked: listed || (!untracked && !ignored),
        ignored: ignored && !listed,
        dirty: WORKTREE_CHANGES
            .iter()
            .any(|&which| snapshot.has(which, path)),
        conflicting: snapshot.has(ChangeSet::Conflicting, path),
        assume_unchanged: snapshot.has(ChangeSet::AssumeUnchanged, path),
        staging,
    }
}

fn classify_container(
    snapshot: &Snapshot,
    tree: &dyn ResourceTree,
    path: &RepoPath,
) -> Classification {
    let staged_beneath = INDEX_CHANGES
        .iter()
        .any(|&which| snapshot.any_beneath(which, path));
    let worktree_beneath = WORKTREE_CHANGES
        .iter()
        .any(|&which| snapshot.any_beneath(which, path));
    let untracked_beneath = snapshot.any_beneath(ChangeSet::Untracked, path);
    let listed_beneath = staged_beneath || worktree_beneath;

    let is_clean_tracked = |leaf: &RepoPath| {
        !snapshot.covers(ChangeSet::Untracked, leaf) && !snapshot.covers(ChangeSet::Ignored, leaf)
    };
    let tracked = listed_beneath || tree.any_leaf_beneath(path, &is_clean_tracked);

    let ignored = snapshot.covers(ChangeSet::Ignored, path)
        || (!untracked_beneath
            && !listed_beneath
            && tree.has_leaves(path)
            && !tree.any_leaf_beneath(path, &|leaf| {
                !snapshot.covers(ChangeSet::Ignored, leaf)
            }));

    Classification {
        tracked,
        ignored,
        dirty: worktree_beneath || untracked_beneath,
        conflicting: snapshot.any_beneath(ChangeSet::Conflicting, path),
        assume_unchanged: false,
        staging: if staged_beneath {
            StagingState::Modified
        } else {
            StagingState::NotStaged
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::LeafSet;

    fn path(input: &str) -> RepoPath {
        RepoPath::parse(input).unwrap()
    }

    fn leaves(paths: &[&str]) -> LeafSet {
        paths.iter().map(|p| path(p)).collect()
    }

    fn leaf(snapshot: &Snapshot, tree: &LeafSet, p: &str) -> Classification {
        classify(snapshot, tree, p, ResourceKind::Leaf).unwrap()
    }

    fn container(snapshot: &Snapshot, tree: &LeafSet, p: &str) -> Classification {
        classify(snapshot, tree, p, ResourceKind::Container).unwrap()
    }

    #[test]
    fn test_empty_snapshot_classifies_tracked_clean() {
        let snapshot = Snapshot::empty("/repo");
        let tree = leaves(&["Project/src/a.txt", "Project/b.txt"]);

        assert_eq!(leaf(&snapshot, &tree, "Project/b.txt"), Classification::clean());
        assert_eq!(container(&snapshot, &tree, "Project"), Classification::clean());
        assert_eq!(container(&snapshot, &tree, ""), Classification::clean());
    }

    #[test]
    fn test_new_file_before_and_after_staging() -> Result<()> {
        let tree = leaves(&["Project/existing.txt", "Project/TestFile"]);

        let before = Snapshot::builder("/repo")
            .with(ChangeSet::Untracked, "Project/TestFile")?
            .build()?;
        assert_eq!(
            container(&before, &tree, "Project"),
            Classification::clean().with_dirty(true)
        );
        let file = leaf(&before, &tree, "Project/TestFile");
        assert!(!file.tracked);
        assert!(!file.ignored);
        assert_eq!(file.staging, StagingState::NotStaged);

        let after = Snapshot::builder("/repo")
            .with(ChangeSet::Added, "Project/TestFile")?
            .build()?;
        assert_eq!(
            container(&after, &tree, "Project"),
            Classification::clean().with_staging(StagingState::Modified)
        );
        assert_eq!(
            leaf(&after, &tree, "Project/TestFile"),
            Classification::clean().with_staging(StagingState::Added)
        );
        Ok(())
    }

    #[test]
    fn test_container_never_reports_added_or_removed() -> Result<()> {
        let tree = leaves(&["p/a", "p/b"]);
        let all_added = Snapshot::builder("/repo")
            .with(ChangeSet::Added, "p/a")?
            .with(ChangeSet::Added, "p/b")?
            .build()?;
        assert_eq!(container(&all_added, &tree, "p").staging, StagingState::Modified);

        let all_removed = Snapshot::builder("/repo")
            .with(ChangeSet::Removed, "p/a")?
            .build()?;
        assert_eq!(container(&all_removed, &tree, "p").staging, StagingState::Modified);
        assert_eq!(leaf(&all_removed, &tree, "p/a").staging, StagingState::Removed);
        Ok(())
    }

    #[test]
    fn test_leaf_staging_and_dirty() -> Result<()> {
        let tree = leaves(&["changed.txt", "both.txt", "gone.txt"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Changed, "changed.txt")?
            .with(ChangeSet::Changed, "both.txt")?
            .with(ChangeSet::Modified, "both.txt")?
            .with(ChangeSet::Missing, "gone.txt")?
            .build()?;

        let changed = leaf(&snapshot, &tree, "changed.txt");
        assert_eq!(changed.staging, StagingState::Modified);
        assert!(!changed.dirty);

        let both = leaf(&snapshot, &tree, "both.txt");
        assert_eq!(both.staging, StagingState::Modified);
        assert!(both.dirty);

        let gone = leaf(&snapshot, &tree, "gone.txt");
        assert!(gone.tracked);
        assert!(gone.dirty);
        assert_eq!(gone.staging, StagingState::NotStaged);
        Ok(())
    }

    #[test]
    fn test_sibling_folder_changes_do_not_leak() -> Result<()> {
        let tree = leaves(&["TestFolder/a.txt", "TestFolder2/b.txt"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Modified, "TestFolder2/b.txt")?
            .with(ChangeSet::Conflicting, "TestFolder2/b.txt")?
            .build()?;

        assert_eq!(container(&snapshot, &tree, "TestFolder"), Classification::clean());
        let sibling = container(&snapshot, &tree, "TestFolder2");
        assert!(sibling.dirty);
        assert!(sibling.conflicting);
        Ok(())
    }

    #[test]
    fn test_ignored_leaf_and_prefix_named_sibling() -> Result<()> {
        let tree = leaves(&["Test", "TestFile"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Ignored, "Test")?
            .build()?;

        let ignored = leaf(&snapshot, &tree, "Test");
        assert!(ignored.ignored);
        assert!(!ignored.tracked);

        let other = leaf(&snapshot, &tree, "TestFile");
        assert!(!other.ignored);
        assert!(other.tracked);
        Ok(())
    }

    #[test]
    fn test_ignored_directory_entry_covers_contents() -> Result<()> {
        let tree = leaves(&["src/main.rs", "target"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Ignored, "target")?
            .build()?;

        let build_dir = container(&snapshot, &tree, "target");
        assert!(build_dir.ignored);
        assert!(!build_dir.tracked);
        assert!(leaf(&snapshot, &tree, "target/debug/app").ignored);

        let root = container(&snapshot, &tree, "");
        assert!(root.tracked);
        assert!(!root.ignored);
        Ok(())
    }

    #[test]
    fn test_container_with_only_ignored_leaves_is_ignored() -> Result<()> {
        let tree = leaves(&["logs/a.log", "logs/b.log", "src/lib.rs"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Ignored, "logs/a.log")?
            .with(ChangeSet::Ignored, "logs/b.log")?
            .build()?;

        let logs = container(&snapshot, &tree, "logs");
        assert!(logs.ignored);
        assert!(!logs.tracked);
        assert!(!logs.dirty);
        Ok(())
    }

    #[test]
    fn test_tracked_container_may_hold_ignored_leaves() -> Result<()> {
        let tree = leaves(&["src/lib.rs", "src/lib.rs.orig"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Ignored, "src/lib.rs.orig")?
            .build()?;

        let src = container(&snapshot, &tree, "src");
        assert!(src.tracked);
        assert!(!src.ignored);
        Ok(())
    }

    #[test]
    fn test_empty_container_is_neither_tracked_nor_ignored() {
        let snapshot = Snapshot::empty("/repo");
        let tree = leaves(&["src/lib.rs"]);
        let empty = container(&snapshot, &tree, "docs");
        assert!(!empty.tracked);
        assert!(!empty.ignored);
    }

    #[test]
    fn test_container_of_untracked_files_only() -> Result<()> {
        let tree = leaves(&["new/a.txt", "new/b.txt"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::Untracked, "new")?
            .build()?;

        let folder = container(&snapshot, &tree, "new");
        assert!(!folder.tracked);
        assert!(folder.dirty);
        assert!(!folder.ignored);
        assert!(!leaf(&snapshot, &tree, "new/a.txt").tracked);
        Ok(())
    }

    #[test]
    fn test_assume_unchanged_leaf() -> Result<()> {
        let tree = leaves(&["config.ini"]);
        let snapshot = Snapshot::builder("/repo")
            .with(ChangeSet::AssumeUnchanged, "config.ini")?
            .build()?;
        let config = leaf(&snapshot, &tree, "config.ini");
        assert!(config.assume_unchanged);
        assert!(config.tracked);
        assert!(!container(&snapshot, &tree, "").assume_unchanged);
        Ok(())
    }

    #[test]
    fn test_invalid_paths_are_rejected() {
        let snapshot = Snapshot::empty("/repo");
        let tree = LeafSet::new();

        let outside = classify(&snapshot, &tree, "/other/file.txt", ResourceKind::Leaf);
        assert!(matches!(outside, Err(GitDecoratorError::InvalidPath { .. })));

        let escape = classify(&snapshot, &tree, "../file.txt", ResourceKind::Leaf);
        assert!(matches!(escape, Err(GitDecoratorError::InvalidPath { .. })));

        let aggregate = classify(&snapshot, &tree, "src", ResourceKind::AggregateRoot);
        assert!(matches!(aggregate, Err(GitDecoratorError::InvalidPath { .. })));
    }

    #[test]
    fn test_absolute_paths_inside_root() {
        let snapshot = Snapshot::empty("/repo");
        let tree = leaves(&["src/lib.rs"]);
        let c = classify(&snapshot, &tree, "/repo/src", ResourceKind::Container).unwrap();
        assert_eq!(c, Classification::clean());
    }
}
