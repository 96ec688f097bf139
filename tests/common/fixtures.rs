//! Predefined repository scenarios
//!
//! Each function builds a repository in a specific state so tests across
//! files start from the same situation.

#![allow(dead_code)]

use super::repository::*;
use git_decorator::core::error::Result;

/// Scenario: committed `Project/existing.txt` plus a new, untracked `Project/TestFile`
pub fn create_project_with_new_file() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "Project/existing.txt", "existing\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "Project/TestFile", "new\n")?;

    Ok(repo)
}

/// Scenario: a sibling folder setup for change isolation
///
/// `app/main.rs` and `lib/util.rs` are committed, then `app/main.rs` is
/// modified in the work tree.
pub fn create_sibling_folders_with_change() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "app/main.rs", "fn main() {}\n")?;
    create_file(&repo.path, "lib/util.rs", "pub fn util() {}\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "app/main.rs", "fn main() { println!(); }\n")?;

    Ok(repo)
}

/// Scenario: committed `.gitignore` ignoring `target/`, with build output present
pub fn create_repo_with_ignored_dir() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, ".gitignore", "target/\n")?;
    create_file(&repo.path, "src/lib.rs", "pub fn lib() {}\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "target/debug/app", "binary\n")?;

    Ok(repo)
}

/// Scenario: `conflict.txt` left conflicted by a failed merge
pub fn create_repo_with_conflict() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "conflict.txt", "base\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Base")?;
    git_run(&repo.path, &["checkout", "-q", "-b", "other"])?;

    create_file(&repo.path, "conflict.txt", "other side\n")?;
    git_commit_all(&repo, "Other side")?;
    git_run(&repo.path, &["checkout", "-q", "-"])?;

    create_file(&repo.path, "conflict.txt", "this side\n")?;
    git_commit_all(&repo, "This side")?;
    git_run(&repo.path, &["merge", "other"])?;

    Ok(repo)
}

fn git_commit_all(repo: &TestRepo, message: &str) -> Result<()> {
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, message)
}
