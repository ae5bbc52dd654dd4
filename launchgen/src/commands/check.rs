use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use launchgen_codegen::GenerateOptions;
use launchgen_core::Runtime;

use super::project_root;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Project root; must contain .vscode (defaults to searching upwards)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Runtime to check against (overrides detection)
    #[arg(short, long)]
    pub runtime: Option<Runtime>,

    /// Extra runtime arguments, as passed to `generate`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let root = project_root(self.root.as_deref());
        let options = GenerateOptions {
            runtime: self.runtime,
            extra_runtime_args: self.extra.clone(),
        };

        let report = ops::check(&root, options)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_current() {
            std::process::exit(1);
        }

        Ok(())
    }
}
