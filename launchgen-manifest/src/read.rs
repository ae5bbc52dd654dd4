//! Best-effort JSON loading.

use std::{io, path::Path};

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Dialect a file is parsed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Strict JSON.
    #[default]
    Json,
    /// JSON with `//` and `/* */` comments and trailing commas, as VS Code
    /// writes launch.json.
    Jsonc,
}

/// Read and parse a JSON file, treating absence as the default value.
///
/// A missing or blank file yields `Ok(T::default())`. Any other read failure
/// and malformed JSON are returned as errors, leaving it to the caller to
/// decide whether they are fatal.
pub fn read_or_default<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    read_or_default_with(path, Syntax::Json)
}

/// Like [`read_or_default`], parsing the file as `syntax`.
pub fn read_or_default_with<T>(path: impl AsRef<Path>, syntax: Syntax) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file absent, using defaults");
            return Ok(T::default());
        }
        Err(e) => {
            return Err(Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            }));
        }
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_str_with_filename(&content, &filename, syntax)
}

/// Parse JSON from a string with a filename for error reporting
pub fn parse_str_with_filename<T>(content: &str, filename: &str, syntax: Syntax) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    match syntax {
        Syntax::Json => {
            serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
        }
        Syntax::Jsonc => serde_json_lenient::from_str_lenient(content)
            .map_err(|e| Error::parse_jsonc(e, content, filename)),
    }
}
