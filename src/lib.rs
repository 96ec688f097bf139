//! Git Decorator - working-tree status decoration engine.
//!
//! Given an immutable [`Snapshot`] of a repository's index and work-tree
//! status, this library classifies resources (files, folders, the project),
//! aggregates classifications over arbitrary groupings, and selects exactly
//! one overlay identity per classification.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`classify`] / [`decorate`] / [`decorate_grouping`]
//! - [`reduce_grouping`] and [`Classification::merge`]
//! - [`select_overlay`] / [`select_overlay_with`]
//! - [`GitRepo::read_state`] to build snapshots from a real repository

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Decoration engine
    aggregate,
    classify,
    classify_repo_path,
    decorate,
    decorate_grouping,
    reduce_grouping,
    render_label,
    select_overlay,
    select_overlay_with,

    ChangeSet,
    Classification,
    // Config
    DecoratorConfig,
    // Error handling
    GitDecoratorError,
    // Git backend
    GitRepo,
    Grouping,
    GroupingFlavor,
    GroupingMember,
    LabelContext,
    LabelFormats,
    LeafSet,
    OverlayIdentity,
    OverlayPreferences,
    RepoPath,
    RepositoryState,
    Resource,
    ResourceDecoration,
    ResourceKind,
    ResourceTree,
    Result,
    Snapshot,
    SnapshotBuilder,
    StagingState,
};
