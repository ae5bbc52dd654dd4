use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for launchgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(launchgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(launchgen::parse_error),
        help("the file is ignored and defaults are used instead")
    )]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_of(src, source.line(), source.column());
        Self::parse_at(Box::new(source), span, src, filename)
    }

    /// Create a parse error from a JSON-with-comments error with source context
    pub fn parse_jsonc(source: serde_json_lenient::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_of(src, source.line(), source.column());
        Self::parse_at(Box::new(source), span, src, filename)
    }

    fn parse_at(
        source: Box<dyn std::error::Error + Send + Sync>,
        span: Option<SourceSpan>,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert serde_json's one-based line/column into a one-byte span.
fn span_of(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len().saturating_sub(1));
    Some(SourceSpan::from((offset, 1)))
}
