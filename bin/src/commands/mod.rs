//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod generate;
pub(crate) mod list;
pub(crate) mod rasterize;
