//! Final merge and write of `.vscode/launch.json`.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use launchgen_core::{File, GeneratedFile, LAUNCH_JSON, WriteResult};
use launchgen_manifest::LaunchSpec;

use crate::pipeline::GenerationContext;

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Absolute path of the written launch.json.
    pub path: PathBuf,
    pub write: WriteResult,
    /// User-authored entries carried over.
    pub retained: usize,
    /// Names of the generated entries, in output order.
    pub added: Vec<String>,
    /// Stale generated entries dropped from the previous file.
    pub removed: usize,
}

/// Merges the retained user entries with the freshly generated ones.
///
/// User entries come first in their original order, followed by the
/// generated entries in the order the pipeline produced them.
pub struct Generator {
    root: PathBuf,
    spec: LaunchSpec,
    retained: usize,
    added: Vec<String>,
    removed: usize,
}

impl Generator {
    /// Build the merged document from a finished pipeline run.
    pub fn from_context(ctx: GenerationContext) -> Result<Self> {
        let GenerationContext {
            root,
            mut spec,
            entries,
            removed,
            ..
        } = ctx;

        let retained = spec.configurations.len();
        let mut added = Vec::with_capacity(entries.len());
        for entry in entries {
            let value = entry
                .to_value()
                .wrap_err_with(|| format!("Failed to serialize '{}'", entry.name))?;
            spec.configurations.push(value);
            added.push(entry.name);
        }

        Ok(Self {
            root,
            spec,
            retained,
            added,
            removed,
        })
    }

    /// The merged launch.json document.
    pub fn spec(&self) -> &LaunchSpec {
        &self.spec
    }

    pub fn retained(&self) -> usize {
        self.retained
    }

    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Render launch.json without touching the disk.
    pub fn preview(&self) -> Result<File> {
        let launch = LaunchJson { spec: &self.spec };
        Ok(File::new(launch.path(&self.root), launch.render()?))
    }

    /// Whether launch.json on disk already matches the merged document.
    pub fn is_current(&self) -> Result<bool> {
        Ok(self.preview()?.is_current())
    }

    /// Write launch.json, replacing the previous file atomically.
    pub fn generate(&self) -> Result<GenerateResult> {
        let launch = LaunchJson { spec: &self.spec };
        let path = launch.path(&self.root);
        let write = launch
            .write(&self.root)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            retained = self.retained,
            added = self.added.len(),
            removed = self.removed,
            "wrote launch configurations"
        );

        Ok(GenerateResult {
            path,
            write,
            retained: self.retained,
            added: self.added.clone(),
            removed: self.removed,
        })
    }
}

/// The `.vscode/launch.json` file.
struct LaunchJson<'a> {
    spec: &'a LaunchSpec,
}

impl GeneratedFile for LaunchJson<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(LAUNCH_JSON)
    }

    fn render(&self) -> Result<String> {
        self.spec
            .to_json_pretty()
            .wrap_err("Failed to render launch.json")
    }
}

#[cfg(test)]
mod tests {
    use launchgen_manifest::LaunchEntry;
    use serde_json::json;

    use super::*;
    use crate::pipeline::GenerateOptions;

    fn context() -> GenerationContext {
        let mut ctx = GenerationContext::new("/project", GenerateOptions::default());
        ctx.spec.configurations = vec![json!({ "name": "Attach", "request": "attach" })];
        ctx.removed = 3;
        ctx.push_entry(
            "test",
            LaunchEntry::new("Debug a.test.ts", "deno", 9229, "integratedTerminal"),
        );
        ctx
    }

    #[test]
    fn test_user_entries_come_first() {
        let generator = Generator::from_context(context()).unwrap();

        let names: Vec<_> = generator.spec().names().collect();
        assert_eq!(names, ["Attach", "Debug a.test.ts"]);
        assert_eq!(generator.retained(), 1);
        assert_eq!(generator.added(), ["Debug a.test.ts"]);
        assert_eq!(generator.removed(), 3);
    }

    #[test]
    fn test_preview_path_and_trailing_newline() {
        let generator = Generator::from_context(context()).unwrap();
        let file = generator.preview().unwrap();

        assert_eq!(file.path(), Path::new("/project/.vscode/launch.json"));
        assert!(file.content().ends_with("}\n"));
        assert!(file.content().starts_with("{\n  \"version\": \"0.2.0\""));
    }
}
