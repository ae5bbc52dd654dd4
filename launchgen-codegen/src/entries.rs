//! Launch entry templates.
//!
//! Discovered test files and custom group scripts both become
//! [`LaunchEntry`] values tagged with the generator's sentinel.

use launchgen_core::Runtime;
use launchgen_manifest::{LaunchConfig, LaunchEntry, LaunchGroup};

use crate::discovery::DiscoveredFile;

const WORKSPACE_FOLDER: &str = "${workspaceFolder}";

/// Entry for a discovered test or run file.
///
/// `runtimeArgs` is the runtime's test defaults, then the file, then the
/// configured test arguments, then any arguments passed on the command line.
pub fn test_entry(
    file: &DiscoveredFile,
    runtime: Runtime,
    config: &LaunchConfig,
    extra_args: &[String],
) -> LaunchEntry {
    LaunchEntry::new(
        format!("Debug {}", file.relative),
        runtime.executable(),
        config.port(),
        config.console(),
    )
    .with_runtime_args(runtime.test_args().iter().copied())
    .with_runtime_args([workspace_path(&file.relative)])
    .with_runtime_args(config.tests.runtime_args.iter().cloned())
    .with_runtime_args(extra_args.iter().cloned())
}

/// Entries for every script of a custom group, in script order.
pub fn group_entries(
    group: &LaunchGroup,
    runtime: Runtime,
    config: &LaunchConfig,
) -> Vec<LaunchEntry> {
    let script_args = group.script_args();

    group
        .scripts()
        .iter()
        .map(|script| {
            let tokens = script.tokens();
            let name = format!("Debug {} {}", group.program, tokens.join(" "));

            LaunchEntry::new(
                name.trim_end(),
                runtime.executable(),
                config.port(),
                config.console(),
            )
            .with_program(workspace_path(&group.program))
            .with_runtime_args(runtime.run_args().iter().copied())
            .with_runtime_args(group.runtime_args.iter().cloned())
            .with_args(script_args.iter().cloned().chain(tokens))
        })
        .collect()
}

/// User arguments that already appear in `defaults`, in user order.
///
/// Only exact token equality counts; `--allow-all` is not treated as a
/// duplicate of `-A`.
pub fn duplicate_args<'a>(defaults: &[&str], user: &'a [String]) -> Vec<&'a str> {
    user.iter()
        .map(String::as_str)
        .filter(|arg| defaults.contains(arg))
        .collect()
}

/// Advisory text for a redundant runtime argument.
pub fn duplicate_arg_message(arg: &str) -> String {
    format!("runtimeArg \"{}\" is already in the default list", arg)
}

fn workspace_path(relative: &str) -> String {
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    format!("{}/{}", WORKSPACE_FOLDER, relative)
}
