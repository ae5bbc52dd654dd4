//! Detect phase - chooses the runtime.

use eyre::Result;
use launchgen_core::Runtime;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that picks the runtime: the caller's override if given, otherwise
/// whichever descriptor file exists at the root.
pub struct DetectPhase;

impl Phase for DetectPhase {
    fn name(&self) -> &'static str {
        "detect"
    }

    fn description(&self) -> &'static str {
        "Detect the project runtime"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let runtime = match ctx.options.runtime {
            Some(runtime) => runtime,
            None => Runtime::detect(&ctx.root),
        };
        tracing::info!(%runtime, "using runtime");
        ctx.runtime = Some(runtime);
        Ok(())
    }
}
