// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod launch;
mod options;
mod read;

pub use descriptor::{DenoConfig, PackageJson, ProjectDescriptor, TestFilter, Workspaces};
pub use error::{Error, Result};
pub use launch::{
    DEFAULT_CONSOLE, DEFAULT_PORT, LAUNCH_VERSION, LaunchEntry, LaunchSpec, SENTINEL_KEY,
    SENTINEL_VALUE, is_generated,
};
pub use options::{LaunchConfig, LaunchGroup, Script, TestOptions};
pub use read::{Syntax, parse_str_with_filename, read_or_default, read_or_default_with};
