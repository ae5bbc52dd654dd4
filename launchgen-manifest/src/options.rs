//! Tool options read from `launch.config.json`.

use serde::Deserialize;

use crate::{DEFAULT_CONSOLE, DEFAULT_PORT};

/// User-authored options for launchgen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    /// Debugger attach port (`attachSimplePort`)
    pub port: Option<u16>,

    /// Where the debuggee's output goes (`integratedTerminal`, `internalConsole`, ...)
    pub console: Option<String>,

    /// Options applied to every discovered test entry
    #[serde(default)]
    pub tests: TestOptions,

    /// Custom script groups
    #[serde(default)]
    pub groups: Vec<LaunchGroup>,
}

impl LaunchConfig {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn console(&self) -> &str {
        self.console.as_deref().unwrap_or(DEFAULT_CONSOLE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOptions {
    /// Extra runtime arguments appended after the test file
    #[serde(default)]
    pub runtime_args: Vec<String>,
}

/// A set of scripts sharing one program and its runtime arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchGroup {
    /// Program path relative to the workspace folder
    pub program: String,

    #[serde(default)]
    pub runtime_args: Vec<String>,

    /// Arguments placed before every script's own tokens
    #[serde(default)]
    pub script_args: Option<Script>,

    /// One launch entry is generated per script
    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl LaunchGroup {
    /// The group's scripts, or a single empty script when none are listed.
    pub fn scripts(&self) -> Vec<Script> {
        if self.scripts.is_empty() {
            vec![Script::Line(String::new())]
        } else {
            self.scripts.clone()
        }
    }

    pub fn script_args(&self) -> Vec<String> {
        self.script_args
            .as_ref()
            .map(Script::tokens)
            .unwrap_or_default()
    }
}

/// Script arguments, written either as one string or as a token list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Script {
    Line(String),
    Tokens(Vec<String>),
}

impl Script {
    /// Split into argument tokens. A line is split on whitespace.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Script::Line(line) => line.split_whitespace().map(str::to_string).collect(),
            Script::Tokens(tokens) => tokens.clone(),
        }
    }
}
