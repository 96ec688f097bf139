//! Core functionality for git-decorator.
//!
//! The decoration engine (paths, snapshots, classifier, decorator, reducer,
//! overlay selection) is pure and free of I/O. The git backend, config and
//! output modules surround it for the command line front end.

pub mod classification;
pub mod classifier;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod decorator;
pub mod dirs;
pub mod error;
pub mod git;
pub mod label;
pub mod output;
pub mod overlay;
pub mod reducer;
pub mod repo_path;
pub mod resources;
pub mod snapshot;

// === Error handling ===
pub use error::{GitDecoratorError, Result};

// === Decoration engine ===
// Snapshot -> classifier -> decorator -> (reducer) -> overlay selector
pub use classification::{Classification, StagingState};
pub use classifier::{classify, classify_repo_path};
pub use decorator::{aggregate, decorate, decorate_grouping, ResourceDecoration};
pub use overlay::{select_overlay, select_overlay_with, OverlayIdentity, OverlayPreferences};
pub use reducer::reduce_grouping;
pub use repo_path::RepoPath;
pub use resources::{
    Grouping, GroupingFlavor, GroupingMember, LeafSet, Resource, ResourceKind, ResourceTree,
};
pub use snapshot::{ChangeSet, Snapshot, SnapshotBuilder};

// === Labels and config ===
pub use config::DecoratorConfig;
pub use label::{render_label, LabelContext, LabelFormats};

// === Git backend ===
pub use git::{GitRepo, RepositoryState};

// === Command support ===
pub use command_init::DecorationContext;
pub use output::{print_decoration_lines, print_error, DecorationLine};
