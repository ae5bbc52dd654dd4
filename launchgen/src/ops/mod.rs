//! Core operations.
//!
//! This module contains the business logic for launchgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use eyre::{Context, Result, eyre};
use launchgen_codegen::{
    GenerateOptions, GenerationContext, Generator, Pipeline,
    pipeline::{Phase, Severity, TracingPlugin, phases::LoadPhase},
};
use launchgen_core::Runtime;

pub use check::check;
pub use generate::{GenerateMode, generate};

use crate::reports::Notices;

/// A finished pipeline run, ready to preview or write.
struct Run {
    runtime: Runtime,
    generator: Generator,
    notices: Notices,
}

/// Run the pipeline for `root` and merge its entries.
fn run_pipeline(root: &Path, options: GenerateOptions) -> Result<Run> {
    let pipeline = Pipeline::new().plugin(TracingPlugin::new());
    let mut ctx = pipeline.run(root, options).wrap_err("Pipeline failed")?;

    let runtime = ctx
        .runtime
        .ok_or_else(|| eyre!("pipeline finished without a runtime"))?;
    let notices = take_notices(&mut ctx);
    let generator = Generator::from_context(ctx).wrap_err("Failed to merge configurations")?;

    Ok(Run {
        runtime,
        generator,
        notices,
    })
}

/// Collect diagnostics for display.
///
/// Unreadable inputs are rendered from their miette diagnostic, which
/// carries the source span, so the plain load warning is skipped.
fn take_notices(ctx: &mut GenerationContext) -> Notices {
    let load_errors = ctx
        .load_errors
        .drain(..)
        .map(|err| format!("{:?}", miette::Report::new(err)))
        .collect();

    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Warning if diag.phase == LoadPhase.name() => {}
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Notices {
        load_errors,
        warnings,
        infos,
    }
}
