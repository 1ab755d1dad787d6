//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by the extraction pipeline.
pub mod extract;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use extract::{Extraction, Summary};
pub use pipeline::Pipeline;
