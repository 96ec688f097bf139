//! Resource model seen by the decorator.
//!
//! # Public API
//! - [`ResourceKind`]: leaf, container or aggregate root
//! - [`Resource`]: one workspace resource (path + leaf/container)
//! - [`Grouping`] / [`GroupingMember`]: logical collections of resources
//! - [`ResourceTree`]: callback answering questions about leaves under a container
//! - [`LeafSet`]: the provided [`ResourceTree`], a sorted set of known leaves

use crate::core::repo_path::RepoPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Bound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A single file
    Leaf,
    /// A folder or project subtree
    Container,
    /// A grouping or named collection
    AggregateRoot,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Leaf => "file",
            ResourceKind::Container => "folder",
            ResourceKind::AggregateRoot => "group",
        }
    }
}

/// A workspace resource as handed in by the resource model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub path: RepoPath,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn leaf(path: RepoPath) -> Self {
        Self {
            path,
            kind: ResourceKind::Leaf,
        }
    }

    pub fn container(path: RepoPath) -> Self {
        Self {
            path,
            kind: ResourceKind::Container,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingFlavor {
    /// A file and its dependents treated as one logical change
    ResourceMapping,
    /// A user-defined set of projects or resources
    NamedCollection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupingMember {
    Resource(Resource),
    Group(Grouping),
}

/// An ordered list of resources decorated as one unit.
///
/// A grouping has no snapshot membership of its own; its classification is
/// always derived from its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub name: String,
    pub flavor: GroupingFlavor,
    pub members: Vec<GroupingMember>,
}

impl Grouping {
    pub fn new(name: impl Into<String>, flavor: GroupingFlavor) -> Self {
        Self {
            name: name.into(),
            flavor,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.members.push(GroupingMember::Resource(resource));
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: Grouping) -> Self {
        self.members.push(GroupingMember::Group(group));
        self
    }
}

/// Questions the classifier asks the resource model about a container.
pub trait ResourceTree {
    /// True when some leaf beneath `container` satisfies `predicate`.
    fn any_leaf_beneath(&self, container: &RepoPath, predicate: &dyn Fn(&RepoPath) -> bool)
        -> bool;

    /// True when `container` has at least one leaf beneath it.
    fn has_leaves(&self, container: &RepoPath) -> bool {
        self.any_leaf_beneath(container, &|_| true)
    }
}

/// Sorted set of every leaf the resource model knows about.
///
/// The git backend fills it from the index entries plus the untracked and
/// ignored entries of the status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSet {
    leaves: BTreeSet<RepoPath>,
}

impl LeafSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, leaf: RepoPath) {
        self.leaves.insert(leaf);
    }

    pub fn contains(&self, leaf: &RepoPath) -> bool {
        self.leaves.contains(leaf)
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

impl FromIterator<RepoPath> for LeafSet {
    fn from_iter<I: IntoIterator<Item = RepoPath>>(iter: I) -> Self {
        Self {
            leaves: iter.into_iter().collect(),
        }
    }
}

impl ResourceTree for LeafSet {
    fn any_leaf_beneath(
        &self,
        container: &RepoPath,
        predicate: &dyn Fn(&RepoPath) -> bool,
    ) -> bool {
        if container.is_root() {
            return self.leaves.iter().any(predicate);
        }
        if self.leaves.get(container).is_some_and(predicate) {
            return true;
        }
        let (low, high) = container.descendant_range();
        self.leaves
            .range((Bound::Included(low), Bound::Excluded(high)))
            .any(predicate)
    }
}
