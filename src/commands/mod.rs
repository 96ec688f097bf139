pub mod decorate;
pub mod group;

pub use decorate::*;
pub use group::*;
