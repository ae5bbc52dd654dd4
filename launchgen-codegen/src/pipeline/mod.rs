//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the generation
//! phases in a fixed order over a [`GenerationContext`]:
//!
//! - detect → load → filter → discover → augment
//! - Plugin hooks before/after each phase
//! - Unified diagnostics collection
//!
//! Writing the result is left to [`crate::Generator`], so a pipeline run never
//! touches the filesystem beyond reading.
//!
//! # Example
//!
//! ```ignore
//! use launchgen_codegen::{GenerateOptions, Generator, Pipeline};
//!
//! let ctx = Pipeline::new().run(root, GenerateOptions::default())?;
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! Generator::from_context(ctx)?.generate()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{GenerateOptions, GenerationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
