//! Workspace scope resolution.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use globset::GlobBuilder;
use indexmap::IndexSet;
use launchgen_core::Runtime;
use walkdir::WalkDir;

use super::{filter::normalize, is_skipped_dir, relative_path};

/// A directory under which discovery runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    /// Absolute directory.
    pub dir: PathBuf,
    /// Root-relative label, empty for the project root.
    pub label: String,
}

impl Scope {
    pub fn root(root: &Path) -> Self {
        Self {
            dir: root.to_path_buf(),
            label: String::new(),
        }
    }

    fn member(root: &Path, label: String) -> Self {
        Self {
            dir: root.join(&label),
            label,
        }
    }
}

/// Scopes resolved from a descriptor, plus entries that were skipped.
#[derive(Debug, Default)]
pub struct ResolvedScopes {
    pub scopes: Vec<Scope>,
    /// Human-readable reasons for workspace entries that produced no scope.
    pub skipped: Vec<String>,
}

/// Resolve workspace entries into scopes.
///
/// With no entries the project root is the only scope. Literal entries name
/// a directory that must exist. Glob entries are matched against directories
/// under `root`, and a match counts only if it holds `runtime`'s descriptor
/// file. Scopes keep declaration order and each directory appears once.
pub fn resolve_scopes(
    root: &Path,
    workspaces: Option<&[String]>,
    runtime: Runtime,
) -> Result<ResolvedScopes> {
    let Some(entries) = workspaces else {
        return Ok(ResolvedScopes {
            scopes: vec![Scope::root(root)],
            skipped: Vec::new(),
        });
    };

    let mut seen = IndexSet::new();
    let mut skipped = Vec::new();

    for entry in entries {
        let pattern = normalize(entry);
        if pattern == "**" {
            seen.insert(Scope::root(root));
        } else if is_glob(&pattern) {
            let matches = expand_glob(root, &pattern, runtime)?;
            if matches.is_empty() {
                skipped.push(format!(
                    "workspace '{}' matched no directory containing {}",
                    entry,
                    runtime.descriptor_file()
                ));
            }
            seen.extend(matches);
        } else if root.join(&pattern).is_dir() {
            seen.insert(Scope::member(root, pattern));
        } else {
            skipped.push(format!("workspace '{}' is not a directory", entry));
        }
    }

    Ok(ResolvedScopes {
        scopes: seen.into_iter().collect(),
        skipped,
    })
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

/// Directories under `root` matching `pattern` that hold a descriptor file.
fn expand_glob(root: &Path, pattern: &str, runtime: Runtime) -> Result<Vec<Scope>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .wrap_err_with(|| format!("Invalid workspace pattern '{}'", pattern))?
        .compile_matcher();

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if !pattern.contains("**") {
        walker = walker.max_depth(pattern.split('/').count());
    }

    let mut scopes = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_skipped_dir(e)))
    {
        let entry = entry.wrap_err("Failed to expand workspace pattern")?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let label = relative_path(root, entry.path());
        if matcher.is_match(&label) && entry.path().join(runtime.descriptor_file()).is_file() {
            scopes.push(Scope::member(root, label));
        }
    }
    Ok(scopes)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn labels(resolved: &ResolvedScopes) -> Vec<&str> {
        resolved.scopes.iter().map(|s| s.label.as_str()).collect()
    }

    fn resolve(root: &Path, entries: &[&str], runtime: Runtime) -> ResolvedScopes {
        let list: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        resolve_scopes(root, Some(&list[..]), runtime).unwrap()
    }

    fn make_package(root: &Path, dir: &str, descriptor: Option<&str>) {
        let path = root.join(dir);
        fs::create_dir_all(&path).unwrap();
        if let Some(file) = descriptor {
            fs::write(path.join(file), "{}").unwrap();
        }
    }

    #[test]
    fn test_no_workspaces_is_root() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_scopes(temp.path(), None, Runtime::Deno).unwrap();

        assert_eq!(resolved.scopes, [Scope::root(temp.path())]);
    }

    #[test]
    fn test_dot_slash_is_root() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve(temp.path(), &["./"], Runtime::Deno);

        assert_eq!(labels(&resolved), [""]);
        assert_eq!(resolved.scopes[0].dir, temp.path());
    }

    #[test]
    fn test_glob_requires_descriptor() {
        let temp = TempDir::new().unwrap();
        make_package(temp.path(), "packages/workspace2", Some("deno.json"));
        make_package(temp.path(), "packages/workspace1", Some("deno.json"));
        make_package(temp.path(), "packages/workspace3", None);
        make_package(temp.path(), "packages/node_only", Some("package.json"));

        let resolved = resolve(temp.path(), &["packages/*"], Runtime::Deno);

        assert_eq!(
            labels(&resolved),
            ["packages/workspace1", "packages/workspace2"]
        );
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_glob_does_not_descend_past_pattern_depth() {
        let temp = TempDir::new().unwrap();
        make_package(temp.path(), "packages/a/nested", Some("package.json"));

        let resolved = resolve(temp.path(), &["packages/*"], Runtime::Node);

        assert!(resolved.scopes.is_empty());
        assert_eq!(resolved.skipped.len(), 1);
    }

    #[test]
    fn test_literal_entries_and_dedup() {
        let temp = TempDir::new().unwrap();
        make_package(temp.path(), "apps/web", None);

        let entries = ["apps/web", "./apps/web/", "missing"];
        let resolved = resolve(temp.path(), &entries, Runtime::Node);

        assert_eq!(labels(&resolved), ["apps/web"]);
        assert_eq!(resolved.skipped, ["workspace 'missing' is not a directory"]);
    }

    #[test]
    fn test_glob_skips_hidden_and_node_modules() {
        let temp = TempDir::new().unwrap();
        make_package(temp.path(), "node_modules/dep", Some("package.json"));
        make_package(temp.path(), ".cache/pkg", Some("package.json"));
        make_package(temp.path(), "libs/core", Some("package.json"));

        let resolved = resolve(temp.path(), &["*/*"], Runtime::Node);

        assert_eq!(labels(&resolved), ["libs/core"]);
    }
}
