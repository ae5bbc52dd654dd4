//! Load phase - best-effort reads of the JSON inputs.

use eyre::{Result, eyre};
use launchgen_core::{LAUNCH_CONFIG_FILE, LAUNCH_JSON};
use launchgen_manifest::{ProjectDescriptor, Syntax, read_or_default, read_or_default_with};

use crate::pipeline::{GenerationContext, Phase};

/// Phase that loads the existing launch.json, launch.config.json and the
/// project descriptor.
///
/// Each input falls back to its default independently. A file that exists
/// but cannot be read or parsed is kept in `load_errors` and a warning is
/// recorded; it never aborts the run. launch.json may carry comments and
/// trailing commas.
pub struct LoadPhase;

impl Phase for LoadPhase {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "Load launch.json, launch.config.json and the project descriptor"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let runtime = ctx
            .runtime
            .ok_or_else(|| eyre!("runtime not set - LoadPhase must run after DetectPhase"))?;

        match read_or_default_with(ctx.root.join(LAUNCH_JSON), Syntax::Jsonc) {
            Ok(spec) => ctx.spec = spec,
            Err(err) => record(ctx, LAUNCH_JSON, *err),
        }

        match read_or_default(ctx.root.join(LAUNCH_CONFIG_FILE)) {
            Ok(config) => ctx.config = config,
            Err(err) => record(ctx, LAUNCH_CONFIG_FILE, *err),
        }

        let descriptor = match ProjectDescriptor::load(&ctx.root, runtime) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                record(ctx, runtime.descriptor_file(), *err);
                ProjectDescriptor::empty(runtime)
            }
        };
        ctx.descriptor = Some(descriptor);

        Ok(())
    }
}

fn record(ctx: &mut GenerationContext, file: &str, err: launchgen_manifest::Error) {
    tracing::warn!(file, error = %err, "ignoring unreadable input");
    ctx.add_warning("load", format!("ignoring {}: {}", file, err));
    ctx.load_errors.push(err);
}
