//! The `.vscode/launch.json` document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Launch file format version written by VS Code.
pub const LAUNCH_VERSION: &str = "0.2.0";

/// Environment key marking an entry as machine-generated.
pub const SENTINEL_KEY: &str = "LAUNCHGEN";

/// Value of [`SENTINEL_KEY`] on generated entries.
pub const SENTINEL_VALUE: &str = "true";

pub const DEFAULT_PORT: u16 = 9229;
pub const DEFAULT_CONSOLE: &str = "integratedTerminal";

/// The whole launch.json document.
///
/// Configurations stay as raw JSON so user-authored entries round-trip
/// untouched, key order included. Unknown top-level keys such as
/// `compounds` are carried through in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchSpec {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub configurations: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_version() -> String {
    LAUNCH_VERSION.to_string()
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self {
            version: default_version(),
            configurations: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl LaunchSpec {
    /// Drop every generated entry, keeping user entries in their order.
    ///
    /// Returns the number of entries removed.
    pub fn retain_user_entries(&mut self) -> usize {
        let before = self.configurations.len();
        self.configurations.retain(|entry| !is_generated(entry));
        before - self.configurations.len()
    }

    /// Names of the configurations, skipping entries without one.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configurations
            .iter()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Whether a configuration entry was written by launchgen.
pub fn is_generated(entry: &Value) -> bool {
    entry
        .get("env")
        .and_then(|env| env.get(SENTINEL_KEY))
        .and_then(Value::as_str)
        == Some(SENTINEL_VALUE)
}

/// A generated debugger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    pub cwd: String,
    pub runtime_executable: String,
    pub runtime_args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    pub attach_simple_port: u16,
    pub console: String,
    pub env: BTreeMap<String, String>,
}

impl LaunchEntry {
    /// A launch request carrying the sentinel tag.
    pub fn new(
        name: impl Into<String>,
        runtime_executable: impl Into<String>,
        port: u16,
        console: impl Into<String>,
    ) -> Self {
        Self {
            kind: "node".to_string(),
            request: "launch".to_string(),
            name: name.into(),
            program: None,
            cwd: "${workspaceFolder}".to_string(),
            runtime_executable: runtime_executable.into(),
            runtime_args: Vec::new(),
            args: None,
            attach_simple_port: port,
            console: console.into(),
            env: BTreeMap::from([(SENTINEL_KEY.to_string(), SENTINEL_VALUE.to_string())]),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_runtime_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.runtime_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Convert into the raw JSON form stored in [`LaunchSpec`].
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
