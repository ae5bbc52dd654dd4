//! Check command report data structures.

use std::path::PathBuf;

use super::{
    Notices,
    output::{Output, Report},
};

/// Report data from comparing launch.json with a fresh run.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to launch.json.
    pub path: PathBuf,
    /// Diagnostics from the pipeline.
    pub notices: Notices,
    /// Whether the file on disk matches byte for byte.
    pub current: bool,
    /// Configurations a fresh run would write.
    pub expected: usize,
}

impl CheckReport {
    pub fn is_current(&self) -> bool {
        self.current
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.notices.render(out);
        if !self.notices.is_empty() {
            out.newline();
        }

        if self.is_current() {
            out.preformatted(&format!(
                "✓ {} is up to date ({} configurations)",
                self.path.display(),
                self.expected
            ));
        } else {
            out.warning(&format!(
                "{} is out of date, run `launchgen` to regenerate it",
                self.path.display()
            ));
        }
    }
}
