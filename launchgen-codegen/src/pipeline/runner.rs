//! Pipeline orchestrator.

use std::path::PathBuf;

use eyre::Result;

use super::{
    GenerateOptions, GenerationContext, Phase, Plugin,
    phases::{AugmentPhase, DetectPhase, DiscoverPhase, FilterPhase, LoadPhase},
};

/// The generation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (detect, load, filter, discover,
/// augment), calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(TracingPlugin::new());
///
/// let ctx = pipeline.run(root, GenerateOptions::default())?;
/// ```
pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline without plugins.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The built-in phases in execution order.
    pub fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(DetectPhase),
            Box::new(LoadPhase),
            Box::new(FilterPhase),
            Box::new(DiscoverPhase),
            Box::new(AugmentPhase),
        ]
    }

    /// Run the pipeline for the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, e.g. a directory in a
    /// workspace scope cannot be read. Nothing is written in that case.
    pub fn run(
        &self,
        root: impl Into<PathBuf>,
        options: GenerateOptions,
    ) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(root, options);

        for phase in Self::builtin_phases() {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::trace!(
            phase = phase_name,
            description = phase.description(),
            "running phase"
        );

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
