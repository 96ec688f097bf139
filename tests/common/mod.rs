//! Shared test utilities for git-decorator integration tests
//!
//! Everything runs against real git repositories created in temporary
//! directories, driven through the `git` command line.

pub mod assertions;
pub mod fixtures;
pub mod repository;
