//! Generate command report data structures.

use std::path::PathBuf;

use launchgen_core::{Runtime, WriteResult};

use super::{
    Notices,
    output::{Output, Report},
};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root the run was anchored at.
    pub root: PathBuf,

    /// Runtime in effect.
    pub runtime: Runtime,

    /// Diagnostics from the pipeline.
    pub notices: Notices,

    /// User-authored configurations kept.
    pub retained: usize,

    /// Stale generated configurations dropped.
    pub removed: usize,

    /// Names of the generated configurations.
    pub added: Vec<String>,

    /// Written file or dry-run preview.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// launch.json was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

/// Result when launch.json was written.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

/// launch.json in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.notices.render(out);
        if !self.notices.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        out.key_value("Project root", &self.root.display().to_string());
        out.key_value("Runtime", self.runtime.as_str());
        out.preformatted(&format!(
            "Retaining {} configuration{}",
            self.retained,
            plural(self.retained)
        ));
        if self.removed > 0 {
            out.preformatted(&format!(
                "Replacing {} generated configuration{}",
                self.removed,
                plural(self.removed)
            ));
        }

        if !self.added.is_empty() {
            out.section(&format!(
                "Adding {} configuration{}",
                self.added.len(),
                plural(self.added.len())
            ));
            for name in &self.added {
                out.added_item(name);
            }
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_summary(out);
        out.newline();

        let verb = match written.write {
            WriteResult::Created => "Created",
            WriteResult::Overwritten => "Updated",
        };
        out.preformatted(&format!("{} {}", verb, written.path.display()));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewFile) {
        out.divider(&preview.path);
        out.preformatted(preview.content.trim_end());

        out.divider("Summary");
        self.render_summary(out);
        let total = self.retained + self.added.len();
        out.preformatted(&format!(
            "{} configuration{} would be written",
            total,
            plural(total)
        ));
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
