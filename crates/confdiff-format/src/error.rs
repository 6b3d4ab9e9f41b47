//! Error types for the render layer.

use thiserror::Error;

/// Errors that can occur while selecting a format or rendering a diff tree.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The requested format name is not one of the recognized formats.
    #[error("unknown format {0:?}")]
    UnknownFormat(String),

    /// Rendering a nested subtree failed. Carries the key of the subtree so
    /// the failure can be located in deep trees.
    #[error("rendering nested entry {key:?}: {source}")]
    Render {
        key: String,
        #[source]
        source: Box<FormatError>,
    },

    /// The machine-readable encoder failed to serialize the tree.
    #[error("encoding diff as json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for render results.
pub type FormatResult<T> = Result<T, FormatError>;
