//! Core utilities and types for launchgen.
//!
//! This crate provides the runtime flavors, project root discovery and
//! file writing used across the launchgen crates.

mod error;
mod file;
mod root;
mod runtime;

pub use error::{Error, Result};
// File operations
pub use file::{File, GeneratedFile, WriteResult};
// Project layout
pub use root::{
    LAUNCH_CONFIG_FILE, LAUNCH_JSON, MARKER_DIR, SEARCH_DEPTH, find_root, require_root,
};
pub use runtime::Runtime;
