//! Check operation - compare launch.json on disk with a fresh run.

use std::path::Path;

use eyre::Result;
use launchgen_codegen::GenerateOptions;

use super::run_pipeline;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full pipeline but never writes; the report says whether the
/// file on disk already matches what `generate` would produce.
pub fn check(root: &Path, options: GenerateOptions) -> Result<CheckReport> {
    let run = run_pipeline(root, options)?;
    let file = run.generator.preview()?;

    Ok(CheckReport {
        path: file.path().to_path_buf(),
        notices: run.notices,
        current: file.is_current(),
        expected: run.generator.retained() + run.generator.added().len(),
    })
}
