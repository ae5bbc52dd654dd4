//! Test and run file discovery.
//!
//! - [`scopes`] resolves workspace declarations into directories to walk
//! - [`filter`] compiles include/exclude globs
//! - [`discover`] walks every scope in parallel and classifies files

mod filter;
mod scopes;

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use launchgen_core::Runtime;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

pub use filter::PathFilter;
pub use scopes::{ResolvedScopes, Scope, resolve_scopes};

/// A launchable file found under a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated.
    pub relative: String,
}

/// Walk all `scopes` and collect launchable files.
///
/// Scopes are walked concurrently, each into its own list; the lists are
/// concatenated in scope order. Within a scope entries are visited in file
/// name order, so repeated runs see the same sequence.
///
/// # Errors
///
/// Any unreadable directory aborts discovery.
pub fn discover(
    root: &Path,
    scopes: &[Scope],
    filter: &PathFilter,
    runtime: Runtime,
) -> Result<Vec<DiscoveredFile>> {
    let per_scope: Vec<Vec<DiscoveredFile>> = scopes
        .par_iter()
        .map(|scope| walk_scope(root, scope, filter, runtime))
        .collect::<Result<_>>()?;

    Ok(per_scope.into_iter().flatten().collect())
}

/// Walk a single scope.
pub fn walk_scope(
    root: &Path,
    scope: &Scope,
    filter: &PathFilter,
    runtime: Runtime,
) -> Result<Vec<DiscoveredFile>> {
    let mut found = Vec::new();
    let walker = WalkDir::new(&scope.dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(root, filter, e));

    for entry in walker {
        let entry = entry.wrap_err_with(|| format!("Failed to walk {}", scope.dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !runtime.is_launchable(name) {
            continue;
        }
        let relative = relative_path(root, entry.path());
        if !filter.allows(&relative) {
            tracing::trace!(file = %relative, "filtered out");
            continue;
        }
        tracing::debug!(file = %relative, scope = %scope.label, "discovered");
        found.push(DiscoveredFile {
            path: entry.into_path(),
            relative,
        });
    }

    Ok(found)
}

/// Hidden entries, skipped directories and excluded directories.
fn is_pruned(root: &Path, filter: &PathFilter, entry: &DirEntry) -> bool {
    if is_hidden(entry) {
        return true;
    }
    entry.file_type().is_dir()
        && (is_skipped_dir(entry) || filter.is_excluded(&relative_path(root, entry.path())))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Directories never descended into: hidden ones and `node_modules`.
pub(crate) fn is_skipped_dir(entry: &DirEntry) -> bool {
    is_hidden(entry) || entry.file_name() == "node_modules"
}

/// `path` relative to `root` with `/` separators.
pub(crate) fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
