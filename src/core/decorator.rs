//! Resource decorator.
//!
//! Turns classifier output into a [`ResourceDecoration`] for one workspace
//! resource, and decorates [`Grouping`]s by reducing their members. Every
//! nested call receives the same snapshot reference, so one decoration pass
//! never mixes two refreshes.

use crate::core::classification::Classification;
use crate::core::classifier::classify_repo_path;
use crate::core::error::Result;
use crate::core::reducer::reduce_grouping_named;
use crate::core::repo_path::RepoPath;
use crate::core::resources::{Grouping, GroupingMember, Resource, ResourceKind, ResourceTree};
use crate::core::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// A classification together with the identity of what it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDecoration {
    pub kind: ResourceKind,
    pub name: String,
    /// Repository-relative path, absent for groupings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<RepoPath>,
    pub classification: Classification,
}

impl ResourceDecoration {
    pub fn is_aggregate_root(&self) -> bool {
        self.kind == ResourceKind::AggregateRoot
    }
}

/// Decorate one workspace resource.
pub fn decorate(
    snapshot: &Snapshot,
    tree: &dyn ResourceTree,
    resource: &Resource,
) -> Result<ResourceDecoration> {
    let classification = classify_repo_path(snapshot, tree, &resource.path, resource.kind)?;
    Ok(ResourceDecoration {
        kind: resource.kind,
        name: display_name(snapshot, &resource.path),
        path: Some(resource.path.clone()),
        classification,
    })
}

/// Decorate a grouping by decorating each member and reducing the results.
pub fn decorate_grouping(
    snapshot: &Snapshot,
    tree: &dyn ResourceTree,
    grouping: &Grouping,
) -> Result<ResourceDecoration> {
    let members = grouping
        .members
        .iter()
        .map(|member| match member {
            GroupingMember::Resource(resource) => {
                decorate(snapshot, tree, resource).map(|d| d.classification)
            }
            GroupingMember::Group(nested) => {
                decorate_grouping(snapshot, tree, nested).map(|d| d.classification)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    aggregate(&grouping.name, &members)
}

/// Aggregate decoration for classifications that were already computed.
///
/// Lets a caller that decorated each member for display reduce those results
/// instead of classifying every member a second time.
pub fn aggregate(name: &str, members: &[Classification]) -> Result<ResourceDecoration> {
    let classification = reduce_grouping_named(name, members)?;
    log::debug!(
        "grouping '{}' ({} members): {}",
        name,
        members.len(),
        classification
    );

    Ok(ResourceDecoration {
        kind: ResourceKind::AggregateRoot,
        name: name.to_string(),
        path: None,
        classification,
    })
}

fn display_name(snapshot: &Snapshot, path: &RepoPath) -> String {
    match path.file_name() {
        Some(name) => name.to_string(),
        None => snapshot
            .root()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string()),
    }
}
