//! Output renderers for confdiff.
//!
//! Turns the tree produced by `confdiff-tree` into one of three fixed
//! textual formats:
//!
//! - [`Format::Stylish`] is the default: a brace-delimited tree mirroring
//!   the merged shape of both documents, with `-`/`+` change markers.
//! - [`Format::Plain`] emits one sentence per leaf change, addressed by
//!   dotted path.
//! - [`Format::Json`] encodes the tree itself as a JSON document for
//!   machine consumers.
//!
//! The format set is closed. Selection goes through [`Format::from_name`]
//! and dispatch is a match over the enum, so adding a format is a compile
//! error until every dispatch site handles it.

pub mod error;
pub mod json;
pub mod plain;
pub mod stylish;

pub use error::{FormatError, FormatResult};

use confdiff_tree::DiffNode;

/// The three supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Brace-delimited textual tree with two-column change markers.
    #[default]
    Stylish,
    /// Flat property-change sentences with dotted paths.
    Plain,
    /// Machine-readable JSON encoding of the diff tree.
    Json,
}

impl Format {
    /// Resolve a format by name.
    ///
    /// The empty string selects the default (stylish). Any other
    /// unrecognized name is reported verbatim as
    /// [`FormatError::UnknownFormat`].
    pub fn from_name(name: &str) -> FormatResult<Self> {
        match name {
            "" | "stylish" => Ok(Format::Stylish),
            "plain" => Ok(Format::Plain),
            "json" => Ok(Format::Json),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }

    /// The canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Stylish => "stylish",
            Format::Plain => "plain",
            Format::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a diff tree in the format named by `name`.
///
/// Rendering is all-or-nothing: on error no partial output is returned.
/// Stylish and json output end with their closing brace and no trailing
/// newline; plain output terminates every line, including the last.
///
/// # Examples
///
/// ```
/// use confdiff_tree::DiffNode;
/// use serde_json::json;
///
/// let nodes = vec![DiffNode::Added {
///     key: "port".to_string(),
///     new: json!(8080),
/// }];
/// let out = confdiff_format::render("stylish", &nodes)?;
/// assert_eq!(out, "{\n  + port: 8080\n}");
/// # Ok::<(), confdiff_format::FormatError>(())
/// ```
pub fn render(name: &str, nodes: &[DiffNode]) -> FormatResult<String> {
    match Format::from_name(name)? {
        Format::Stylish => stylish::render(nodes),
        Format::Plain => Ok(plain::render(nodes)),
        Format::Json => json::render(nodes),
    }
}
