//! Generation context passed through pipeline phases.

use std::path::PathBuf;

use indexmap::IndexSet;
use launchgen_core::Runtime;
use launchgen_manifest::{LaunchConfig, LaunchEntry, LaunchSpec, ProjectDescriptor};

use super::diagnostic::{Diagnostic, Severity};

/// Caller-supplied settings for a run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Use this runtime instead of detecting one from marker files.
    pub runtime: Option<Runtime>,
    /// Appended to the runtime arguments of every discovered test entry.
    pub extra_runtime_args: Vec<String>,
}

/// Context passed through all pipeline phases.
///
/// Each phase fills in its part: the runtime after detect, the loaded
/// documents after load, and so on. Generated entries accumulate in
/// `entries` in the order they were produced.
#[derive(Debug)]
pub struct GenerationContext {
    /// The project root (directory holding `.vscode`).
    pub root: PathBuf,
    /// Settings for this run.
    pub options: GenerateOptions,
    /// The runtime in effect (populated by DetectPhase).
    pub runtime: Option<Runtime>,
    /// The project descriptor (populated by LoadPhase).
    pub descriptor: Option<ProjectDescriptor>,
    /// Tool options from launch.config.json (defaults until LoadPhase).
    pub config: LaunchConfig,
    /// The existing launch.json; user entries only after FilterPhase.
    pub spec: LaunchSpec,
    /// Number of stale generated entries dropped by FilterPhase.
    pub removed: usize,
    /// Generated entries, unique by name.
    pub entries: Vec<LaunchEntry>,
    /// Inputs that were present but unreadable; defaults were used instead.
    pub load_errors: Vec<launchgen_manifest::Error>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
    names: IndexSet<String>,
}

impl GenerationContext {
    /// Create a new generation context for the project at `root`.
    pub fn new(root: impl Into<PathBuf>, options: GenerateOptions) -> Self {
        Self {
            root: root.into(),
            options,
            runtime: None,
            descriptor: None,
            config: LaunchConfig::default(),
            spec: LaunchSpec::default(),
            removed: 0,
            entries: Vec::new(),
            load_errors: Vec::new(),
            diagnostics: Vec::new(),
            names: IndexSet::new(),
        }
    }

    /// Append a generated entry unless one with the same name exists.
    ///
    /// Returns false, and records a warning, when the entry was dropped.
    pub fn push_entry(&mut self, phase: &str, entry: LaunchEntry) -> bool {
        if !self.names.insert(entry.name.clone()) {
            self.add_warning(
                phase,
                format!("skipping duplicate configuration '{}'", entry.name),
            );
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// Get all info diagnostics.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
    }
}
