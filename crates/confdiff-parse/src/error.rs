//! Error types for document loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or decoding a source document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading a source file failed.
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no supported source format.
    #[error("unsupported file extension {extension:?} for {}", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// Decoding a file's content failed. Wraps the content-level error with
    /// the path so callers comparing two files can tell which one broke.
    #[error("parsing {}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ParseError>,
    },

    /// The text is not well-formed JSON.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is not well-formed YAML.
    #[error("malformed yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A decoded document's root is not a mapping.
    #[error("document root is {kind}, expected a mapping")]
    RootNotMapping { kind: &'static str },
}

/// Convenience alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;
