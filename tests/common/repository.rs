//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories and changing their
//! index and work tree the way a user would from the command line.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_decorator::core::error::{GitDecoratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository plus a private config directory.
///
/// Both `TempDir`s must stay alive for the duration of the test.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub config_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `git-decorator` command running inside the repository with colors off
    /// and the config directory redirected away from the user's.
    pub fn decorator(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("git-decorator")?;
        cmd.current_dir(&self.path)
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    /// Write `config.json` for this repository's decorator runs.
    pub fn write_config(&self, content: &str) -> Result<()> {
        let dir = self.config_dir.path().join("git-decorator");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), content)?;
        Ok(())
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitDecoratorError::Io)?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Initializes the repository and sets user configuration so commits never prompt.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let config_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        config_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with one committed file, "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file (and its parent directories) with the given content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a path to the git index ("." for everything)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Stages the deletion of a tracked file
pub fn git_rm(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["rm", "-q", filename])
}

/// Marks a tracked file assume-unchanged
pub fn git_assume_unchanged(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["update-index", "--assume-unchanged", filename])
}

/// Runs an arbitrary git command, ignoring its exit status
pub fn git_run(repo_path: &Path, args: &[&str]) -> Result<()> {
    git(repo_path, args)
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}
