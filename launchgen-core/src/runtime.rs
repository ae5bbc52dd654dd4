//! Runtime flavors a project can target.

use std::{fmt, path::Path, str::FromStr};

/// JavaScript runtime used to launch discovered files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Runtime {
    /// Deno, marked by `deno.json`
    #[default]
    Deno,
    /// Node.js, marked by `package.json`
    Node,
}

impl Runtime {
    /// Detect the runtime of the project at `root`.
    ///
    /// `deno.json` wins over `package.json`. With neither present the
    /// project is treated as Deno.
    pub fn detect(root: &Path) -> Self {
        if root.join(Runtime::Deno.descriptor_file()).is_file() {
            Runtime::Deno
        } else if root.join(Runtime::Node.descriptor_file()).is_file() {
            Runtime::Node
        } else {
            Runtime::default()
        }
    }

    /// Returns the runtime identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Deno => "deno",
            Runtime::Node => "node",
        }
    }

    /// The project descriptor file for this runtime.
    pub fn descriptor_file(&self) -> &'static str {
        match self {
            Runtime::Deno => "deno.json",
            Runtime::Node => "package.json",
        }
    }

    /// Executable written to `runtimeExecutable`.
    pub fn executable(&self) -> &'static str {
        self.as_str()
    }

    /// Runtime arguments placed before the path of a discovered test file.
    pub fn test_args(&self) -> &'static [&'static str] {
        match self {
            Runtime::Deno => &["test", "--inspect-brk", "-A"],
            Runtime::Node => &["--inspect-brk", "--test"],
        }
    }

    /// Runtime arguments for a custom group program.
    pub fn run_args(&self) -> &'static [&'static str] {
        match self {
            Runtime::Deno => &["run", "--inspect-brk", "-A"],
            Runtime::Node => &["--inspect-brk"],
        }
    }

    /// Source extensions this runtime can execute directly.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Runtime::Deno => &["ts", "tsx", "js", "mjs"],
            Runtime::Node => &["js", "mjs", "cjs", "ts"],
        }
    }

    /// Whether a file name looks like a test or run script.
    ///
    /// Matches names ending in `test.<ext>` or `run.<ext>`, so both
    /// `my.test.ts` and `mytest.ts` qualify.
    pub fn is_launchable(&self, file_name: &str) -> bool {
        let Some((stem, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions().contains(&ext) && (stem.ends_with("test") || stem.ends_with("run"))
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deno" => Ok(Runtime::Deno),
            "node" | "nodejs" => Ok(Runtime::Node),
            _ => Err(format!(
                "unknown runtime '{}', expected 'deno' or 'node'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detect_prefers_deno() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("deno.json"), "{}").unwrap();

        assert_eq!(Runtime::detect(temp.path()), Runtime::Deno);
    }

    #[test]
    fn test_detect_node() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(Runtime::detect(temp.path()), Runtime::Node);
    }

    #[test]
    fn test_detect_defaults_to_deno() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Runtime::detect(temp.path()), Runtime::Deno);
    }

    #[test]
    fn test_is_launchable() {
        assert!(Runtime::Deno.is_launchable("my.test.ts"));
        assert!(Runtime::Deno.is_launchable("server.run.ts"));
        assert!(Runtime::Deno.is_launchable("mytest.ts"));
        assert!(!Runtime::Deno.is_launchable("my.test.cjs"));
        assert!(!Runtime::Deno.is_launchable("helper.ts"));
        assert!(!Runtime::Deno.is_launchable("test"));

        assert!(Runtime::Node.is_launchable("my.test.js"));
        assert!(Runtime::Node.is_launchable("my.test.cjs"));
        assert!(!Runtime::Node.is_launchable("my.test.tsx"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Runtime::from_str("deno").unwrap(), Runtime::Deno);
        assert_eq!(Runtime::from_str("Node").unwrap(), Runtime::Node);
        assert_eq!(Runtime::from_str("nodejs").unwrap(), Runtime::Node);
        assert!(Runtime::from_str("bun").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Runtime::Deno.to_string(), "deno");
        assert_eq!(Runtime::Node.to_string(), "node");
    }
}
