use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for launchgen-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("project root folder not found from '{start}'")]
    #[diagnostic(
        code(launchgen::root_not_found),
        help("your project folder must contain a '.vscode' folder")
    )]
    RootNotFound { start: PathBuf },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(launchgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
