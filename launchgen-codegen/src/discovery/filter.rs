//! Include/exclude glob filtering.

use eyre::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Compiled include and exclude patterns.
///
/// Patterns are relative to the project root. Each pattern matches the path
/// it names and everything beneath it, so `src/ignore` excludes the whole
/// directory. An empty include list admits every path.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl PathFilter {
    /// Compile `include` and `exclude` patterns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that is not a valid glob.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_set(include)?)
        };
        Ok(Self {
            include,
            exclude: build_set(exclude)?,
        })
    }

    /// A filter that admits everything.
    pub fn allow_all() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
        }
    }

    /// Whether `path` (root-relative, `/`-separated) matches an exclude pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.is_match(path)
    }

    /// Whether a file at `path` passes both include and exclude patterns.
    pub fn allows(&self, path: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|set| set.is_match(path));
        included && !self.is_excluded(path)
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::allow_all()
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = normalize(pattern);
        for expanded in [normalized.clone(), format!("{normalized}/**")] {
            let glob = GlobBuilder::new(&expanded)
                .literal_separator(true)
                .build()
                .wrap_err_with(|| format!("Invalid glob pattern '{}'", pattern))?;
            builder.add(glob);
        }
    }
    builder.build().wrap_err("Failed to compile glob patterns")
}

/// Strip `./` prefixes and trailing slashes; the root itself becomes `**`.
pub(crate) fn normalize(pattern: &str) -> String {
    let mut p = pattern.trim();
    while let Some(rest) = p.strip_prefix("./") {
        p = rest;
    }
    let p = p.trim_end_matches('/');
    if p.is_empty() || p == "." {
        "**".to_string()
    } else {
        p.to_string()
    }
}
