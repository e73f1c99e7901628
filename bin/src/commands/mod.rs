//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod list;
pub(crate) mod serve;
pub(crate) mod show;
