use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk, replacing whatever was there
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let existed = path.exists();
        write_file(&path, &self.render()?)?;
        Ok(if existed {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        })
    }
}

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file in the destination directory which
/// is then renamed over `path`, so readers see either the old or the new
/// file, never a truncated one.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("Failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(content.as_bytes())
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("Failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check whether the file on disk already holds exactly this content
    pub fn is_current(&self) -> bool {
        std::fs::read_to_string(&self.path).is_ok_and(|on_disk| on_disk == self.content)
    }
}
