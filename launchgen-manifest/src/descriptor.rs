//! Project descriptors: `deno.json` and `package.json`.

use std::path::Path;

use launchgen_core::Runtime;
use serde::Deserialize;

use crate::{Result, read_or_default};

/// The project descriptor, shaped by the runtime that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectDescriptor {
    Deno(DenoConfig),
    Node(PackageJson),
}

impl ProjectDescriptor {
    /// An empty descriptor for `runtime`.
    pub fn empty(runtime: Runtime) -> Self {
        match runtime {
            Runtime::Deno => ProjectDescriptor::Deno(DenoConfig::default()),
            Runtime::Node => ProjectDescriptor::Node(PackageJson::default()),
        }
    }

    /// Load the descriptor file for `runtime` from `root`.
    ///
    /// A missing file yields [`ProjectDescriptor::empty`].
    pub fn load(root: &Path, runtime: Runtime) -> Result<Self> {
        let path = root.join(runtime.descriptor_file());
        Ok(match runtime {
            Runtime::Deno => ProjectDescriptor::Deno(read_or_default(path)?),
            Runtime::Node => ProjectDescriptor::Node(read_or_default(path)?),
        })
    }

    pub fn runtime(&self) -> Runtime {
        match self {
            ProjectDescriptor::Deno(_) => Runtime::Deno,
            ProjectDescriptor::Node(_) => Runtime::Node,
        }
    }

    /// Declared workspace members, or `None` when the project is a single root.
    pub fn workspaces(&self) -> Option<&[String]> {
        let members = match self {
            ProjectDescriptor::Deno(deno) => deno.workspace.as_slice(),
            ProjectDescriptor::Node(pkg) => pkg.workspaces.members(),
        };
        if members.is_empty() { None } else { Some(members) }
    }

    /// Include patterns for test discovery (empty means everything).
    pub fn include(&self) -> &[String] {
        match self {
            ProjectDescriptor::Deno(DenoConfig {
                tests: Some(filter),
                ..
            }) => &filter.include,
            _ => &[],
        }
    }

    /// Exclude patterns for test discovery.
    pub fn exclude(&self) -> &[String] {
        match self {
            ProjectDescriptor::Deno(DenoConfig {
                tests: Some(filter),
                ..
            }) => &filter.exclude,
            _ => &[],
        }
    }
}

/// The fields of `deno.json` that drive discovery.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DenoConfig {
    /// Workspace member directories or globs
    #[serde(default, alias = "workspaces")]
    pub workspace: Vec<String>,

    /// Test file filters (`test` in deno.json, `tests` accepted too)
    #[serde(default, alias = "test")]
    pub tests: Option<TestFilter>,
}

/// Include/exclude glob lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestFilter {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// The fields of `package.json` that drive discovery.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub workspaces: Workspaces,
}

/// npm/yarn workspaces: either a plain list or `{ "packages": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Workspaces {
    List(Vec<String>),
    Packages {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl Default for Workspaces {
    fn default() -> Self {
        Workspaces::List(Vec::new())
    }
}

impl Workspaces {
    pub fn members(&self) -> &[String] {
        match self {
            Workspaces::List(list) => list,
            Workspaces::Packages { packages } => packages,
        }
    }
}
