mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for launchgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Resolve the project root: `--root` as given, otherwise search upwards
/// from the working directory.
pub(crate) fn project_root(root: Option<&Path>) -> PathBuf {
    let root = match root {
        Some(dir) => launchgen_core::require_root(dir).unwrap_or_exit(),
        None => launchgen_core::find_root(".").unwrap_or_exit(),
    };
    tracing::info!(root = %root.display(), "project root");
    root
}

#[derive(Parser)]
#[command(name = "launchgen")]
#[command(version)]
#[command(about = "Generate VS Code debug configurations for Deno and Node.js tests")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `generate` command
    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write .vscode/launch.json (the default)
    Generate(GenerateCommand),

    /// Report whether .vscode/launch.json is up to date without writing it
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
