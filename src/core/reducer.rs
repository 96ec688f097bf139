//! Aggregate reducer.
//!
//! Folds the classifications of a grouping's members into one. The fold step
//! is [`Classification::merge`]; because it is commutative and associative the
//! member order never changes the answer, and adding a member can only raise
//! flags (or move staging toward `MODIFIED`), never lower them.

use crate::core::classification::Classification;
use crate::core::error::{GitDecoratorError, Result};

/// Reduce an ordered, non-empty list of member classifications.
///
/// An empty list is a caller error and fails with
/// [`GitDecoratorError::EmptyGrouping`] rather than inventing a default.
pub fn reduce_grouping(members: &[Classification]) -> Result<Classification> {
    reduce_grouping_named("<unnamed>", members)
}

pub(crate) fn reduce_grouping_named(name: &str, members: &[Classification]) -> Result<Classification> {
    members
        .iter()
        .copied()
        .reduce(Classification::merge)
        .ok_or_else(|| GitDecoratorError::empty_grouping(name))
}
