//! Generate operation - write or preview launch.json.

use std::path::Path;

use eyre::{Context, Result};
use launchgen_codegen::GenerateOptions;

use super::run_pipeline;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// What to do with the merged launch.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    Write,
    /// Render only; nothing is written.
    Preview,
}

/// Execute the generate operation.
///
/// Runs the pipeline for the project at `root` and writes (or previews)
/// `.vscode/launch.json`.
pub fn generate(
    root: &Path,
    options: GenerateOptions,
    mode: GenerateMode,
) -> Result<GenerateReport> {
    let run = run_pipeline(root, options)?;
    let generator = &run.generator;

    let result = match mode {
        GenerateMode::Preview => {
            let file = generator.preview()?;
            GenerationResult::Preview(PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
        }
        GenerateMode::Write => {
            let written = generator
                .generate()
                .wrap_err("Failed to generate launch.json")?;
            GenerationResult::Written(WrittenResult {
                path: written.path,
                write: written.write,
            })
        }
    };

    Ok(GenerateReport {
        root: root.to_path_buf(),
        runtime: run.runtime,
        notices: run.notices,
        retained: generator.retained(),
        removed: generator.removed(),
        added: generator.added().to_vec(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use launchgen_core::{Runtime, WriteResult};
    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".vscode")).unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("a.test.js"), "").unwrap();
        temp
    }

    fn run(temp: &TempDir, mode: GenerateMode) -> GenerateReport {
        let options = GenerateOptions::default();
        generate(temp.path(), options, mode).unwrap()
    }

    #[test]
    fn test_preview_writes_nothing() {
        let temp = project();

        let report = run(&temp, GenerateMode::Preview);

        assert_eq!(report.runtime, Runtime::Node);
        assert_eq!(report.added, ["Debug a.test.js"]);
        assert!(matches!(report.result, GenerationResult::Preview(_)));
        assert!(!temp.path().join(".vscode/launch.json").exists());
    }

    #[test]
    fn test_write_creates_launch_json() {
        let temp = project();

        let report = run(&temp, GenerateMode::Write);

        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.write, WriteResult::Created);
                assert!(written.path.is_file());
            }
            GenerationResult::Preview(_) => panic!("expected a write"),
        }
    }

    #[test]
    fn test_bad_launch_config_is_reported_not_fatal() {
        let temp = project();
        fs::write(temp.path().join("launch.config.json"), "{ \"port\": }").unwrap();

        let report = run(&temp, GenerateMode::Preview);

        assert_eq!(report.notices.load_errors.len(), 1);
        assert!(report.notices.warnings.is_empty());
        assert!(report.notices.load_errors[0].contains("launch.config.json"));
    }
}
