//! High-level API for confdiff.
//!
//! Ties the pipeline together: load two configuration files, build the
//! diff tree, render it in the requested format. This is the main entry
//! point for applications embedding confdiff; depending on this crate
//! alone pulls in everything needed.

pub mod error;

pub use error::{DiffError, DiffResult};

// Re-export key types
pub use confdiff_format::{render, Format, FormatError};
pub use confdiff_parse::{parse_documents, parse_file, ParseError, SourceFormat};
pub use confdiff_tree::{build_diff, change_count, DiffNode, Document};

use std::path::Path;

use tracing::debug;

/// Compare two configuration files and render their differences.
///
/// The source format of each file follows its extension; the two files do
/// not have to share one. `format` names the output format, with the empty
/// string selecting the default (stylish).
///
/// # Examples
///
/// ```
/// use std::fs;
///
/// let dir = tempfile::tempdir()?;
/// let before = dir.path().join("before.json");
/// let after = dir.path().join("after.json");
/// fs::write(&before, r#"{"port": 80}"#)?;
/// fs::write(&after, r#"{"port": 8080}"#)?;
///
/// let diff = confdiff_sdk::generate_diff(&before, &after, "stylish")?;
/// assert_eq!(diff, "{\n  - port: 80\n  + port: 8080\n}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_diff(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    format: &str,
) -> DiffResult<String> {
    let (document_a, document_b) = parse_documents(path_a.as_ref(), path_b.as_ref())?;
    let nodes = build_diff(&document_a, &document_b);
    debug!(
        entries = nodes.len(),
        changes = change_count(&nodes),
        format,
        "built diff tree"
    );
    Ok(render(format, &nodes)?)
}
