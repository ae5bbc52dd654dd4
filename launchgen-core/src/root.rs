//! Project root discovery.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory whose presence marks the project root.
pub const MARKER_DIR: &str = ".vscode";

/// Output file, relative to the project root.
pub const LAUNCH_JSON: &str = ".vscode/launch.json";

/// Optional tool options file, relative to the project root.
pub const LAUNCH_CONFIG_FILE: &str = "launch.config.json";

/// How many ancestors above the starting directory are searched.
pub const SEARCH_DEPTH: usize = 2;

/// Find the project root by walking up from `start`.
///
/// Checks `start` and at most [`SEARCH_DEPTH`] of its ancestors for a
/// [`MARKER_DIR`] directory. A `.vscode` *file* does not count.
pub fn find_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = absolute(start.as_ref())?;

    for dir in start.ancestors().take(SEARCH_DEPTH + 1) {
        if dir.join(MARKER_DIR).is_dir() {
            tracing::debug!(root = %dir.display(), "found project root");
            return Ok(dir.to_path_buf());
        }
    }

    Err(Box::new(Error::RootNotFound { start }))
}

/// Accept `dir` as the project root without searching its ancestors.
///
/// `dir` must itself contain a [`MARKER_DIR`] directory.
pub fn require_root(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = absolute(dir.as_ref())?;
    if dir.join(MARKER_DIR).is_dir() {
        Ok(dir)
    } else {
        Err(Box::new(Error::RootNotFound { start: dir }))
    }
}

/// Make `path` absolute without touching the filesystem.
///
/// `.` components are dropped, so `"."` becomes the working directory itself.
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io(path, e))
}
