//! Diagnostics gathered during a pipeline run.

use super::output::Output;

/// Messages to show before the main report body.
#[derive(Debug, Default)]
pub struct Notices {
    /// Inputs that could not be read, rendered as miette reports.
    pub load_errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Advisories such as redundant runtime arguments.
    pub infos: Vec<String>,
}

impl Notices {
    pub fn is_empty(&self) -> bool {
        self.load_errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }

    pub fn render(&self, out: &mut dyn Output) {
        for report in &self.load_errors {
            out.warning(report);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }
    }
}
