//! Discovery and generation for launchgen.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phased pipeline (detect → load → filter → discover → augment)
//! - [`discovery`] - Workspace scope resolution, glob filters and the file walker
//! - [`entries`] - Launch entry templates for discovered files and custom groups
//! - [`generator`] - Merges the pipeline result and writes launch.json

pub mod discovery;
pub mod entries;
pub mod generator;
pub mod pipeline;

pub use generator::{GenerateResult, Generator};
pub use pipeline::{GenerateOptions, GenerationContext, Pipeline};
