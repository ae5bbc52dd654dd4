//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads what the
/// earlier phases put into the context and adds its own results.
///
/// Built-in phases:
/// - `DetectPhase` - picks the runtime
/// - `LoadPhase` - reads launch.json, launch.config.json and the descriptor
/// - `FilterPhase` - drops stale generated entries
/// - `DiscoverPhase` - walks workspace scopes for test and run files
/// - `AugmentPhase` - expands custom script groups
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
