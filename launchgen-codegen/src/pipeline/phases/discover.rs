//! Discover phase - one entry per test or run file.

use eyre::{Context, Result, eyre};

use crate::{
    discovery::{PathFilter, discover, resolve_scopes},
    entries::{duplicate_arg_message, duplicate_args, test_entry},
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that walks every workspace scope and adds a launch entry for each
/// launchable file that passes the include/exclude filters.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "Find test and run files in each workspace scope"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let runtime = ctx
            .runtime
            .ok_or_else(|| eyre!("runtime not set - DiscoverPhase must run after DetectPhase"))?;
        let descriptor = ctx
            .descriptor
            .as_ref()
            .ok_or_else(|| eyre!("descriptor not set - DiscoverPhase must run after LoadPhase"))?;

        let resolved = resolve_scopes(&ctx.root, descriptor.workspaces(), runtime)
            .wrap_err("Failed to resolve workspace scopes")?;
        let filter = PathFilter::new(descriptor.include(), descriptor.exclude())
            .wrap_err_with(|| format!("Invalid test filter in {}", runtime.descriptor_file()))?;
        let files = discover(&ctx.root, &resolved.scopes, &filter, runtime)?;

        for reason in resolved.skipped {
            ctx.add_warning(self.name(), reason);
        }

        let advisories: Vec<String> =
            duplicate_args(runtime.test_args(), &ctx.config.tests.runtime_args)
                .into_iter()
                .map(duplicate_arg_message)
                .collect();
        for message in advisories {
            ctx.add_diagnostic(Diagnostic::info(self.name(), message).at("tests.runtimeArgs"));
        }

        tracing::info!(
            scopes = resolved.scopes.len(),
            files = files.len(),
            "discovered test files"
        );

        for file in &files {
            let entry = test_entry(file, runtime, &ctx.config, &ctx.options.extra_runtime_args);
            ctx.push_entry(self.name(), entry);
        }

        Ok(())
    }
}
