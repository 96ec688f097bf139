//! Centralized initialization for decoration commands.
//!
//! [`DecorationContext`] gathers everything one decoration pass needs, once:
//! 1. **Git repository validation**: Ensure we're in a valid git repository
//! 2. **State capture**: Read one snapshot and leaf set, used for the whole pass
//! 3. **Config loading**: Overlay preferences and label formats (defaults on failure)
//! 4. **Label values**: branch and repository name for project labels

use crate::core::{
    config::DecoratorConfig,
    decorator::ResourceDecoration,
    error::{GitDecoratorError, Result},
    git::{GitRepo, RepositoryState},
    label::{render_label, LabelContext},
    output::DecorationLine,
    overlay::select_overlay_with,
    repo_path::RepoPath,
    resources::{Resource, ResourceKind},
};
use std::env;
use std::path::{Component, Path, PathBuf};

pub struct DecorationContext {
    pub git_repo: GitRepo,
    pub state: RepositoryState,
    pub config: DecoratorConfig,
    pub branch: Option<String>,
    pub repository: String,
    base_dir: PathBuf,
}

impl DecorationContext {
    /// Initialize from the current working directory
    pub fn initialize() -> Result<Self> {
        let current_dir = env::current_dir()?;
        Self::initialize_at(&current_dir)
    }

    /// Initialize for the repository containing `dir`; relative arguments resolve against `dir`
    pub fn initialize_at(dir: &Path) -> Result<Self> {
        let git_repo = GitRepo::open(dir).map_err(|_| GitDecoratorError::NotInGitRepo)?;
        let base_dir = std::fs::canonicalize(dir)?;

        let config = DecoratorConfig::load_or_default().unwrap_or_else(|e| {
            log::warn!("Ignoring unusable config (defaults apply): {e}");
            DecoratorConfig::default()
        });

        let state = git_repo.read_state()?;
        let branch = git_repo.current_branch();
        let repository = git_repo.repository_name();

        log::debug!(
            "Initialized decoration pass for '{}' on {:?}",
            repository,
            branch
        );

        Ok(Self {
            git_repo,
            state,
            config,
            branch,
            repository,
            base_dir,
        })
    }

    /// Turn a command-line path into a workspace resource
    ///
    /// Directories on disk and the repository root are containers; everything
    /// else, including deleted files, is a leaf.
    pub fn resolve_resource(&self, argument: &str) -> Result<Resource> {
        let candidate = Path::new(argument);
        let absolute = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        };
        let absolute = normalize_lexically(&absolute)
            .ok_or_else(|| GitDecoratorError::invalid_path(argument))?;

        let path: RepoPath = self.state.snapshot.repo_path(&absolute)?;
        let kind = if path.is_root() || absolute.is_dir() {
            ResourceKind::Container
        } else {
            ResourceKind::Leaf
        };
        Ok(Resource { path, kind })
    }

    /// Pick the overlay and render the label for one decoration
    pub fn decoration_line(&self, decoration: ResourceDecoration) -> DecorationLine {
        let overlay = select_overlay_with(
            &decoration.classification,
            decoration.is_aggregate_root(),
            &self.config.overlays,
        );

        let is_project = decoration.path.as_ref().is_some_and(RepoPath::is_root);
        let labels = &self.config.labels;
        let format = match decoration.kind {
            ResourceKind::Leaf => &labels.file,
            ResourceKind::Container if is_project => &labels.project,
            ResourceKind::Container => &labels.folder,
            ResourceKind::AggregateRoot => &labels.group,
        };

        let context = LabelContext {
            name: Some(decoration.name.as_str()),
            branch: if is_project { self.branch.as_deref() } else { None },
            repository: is_project.then_some(self.repository.as_str()),
            classification: decoration.classification,
        };
        let label = render_label(format, &context);

        DecorationLine {
            decoration,
            overlay,
            label,
        }
    }
}

/// Resolve `.` and `..` without touching the file system; `None` if `..` climbs past the root
fn normalize_lexically(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Some(normalized)
}
