use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use launchgen_codegen::GenerateOptions;
use launchgen_core::Runtime;

use super::project_root;
use crate::{
    ops::{self, GenerateMode},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Project root; must contain .vscode (defaults to searching upwards)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Runtime to generate for (overrides detection from deno.json / package.json)
    #[arg(short, long)]
    pub runtime: Option<Runtime>,

    /// Print the resulting launch.json instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra runtime arguments appended to every test configuration
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let root = project_root(self.root.as_deref());
        let options = GenerateOptions {
            runtime: self.runtime,
            extra_runtime_args: self.extra.clone(),
        };
        let mode = if self.dry_run {
            GenerateMode::Preview
        } else {
            GenerateMode::Write
        };

        let report = ops::generate(&root, options, mode)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
