//! Source document loading for confdiff.
//!
//! Decodes JSON and YAML files into the shared mapping model consumed by
//! `confdiff-tree`. Decoding goes straight into [`serde_json::Value`], so
//! both source formats land in one representation and structural equality
//! works across them. Two shapes of normalization happen on the way in:
//!
//! - whole-valued floats become integers, so `1` and `1.0` compare equal
//!   regardless of which source format spelled them,
//! - a YAML stream holding several documents is deep-merged left to right
//!   into a single mapping.
//!
//! # Key Types
//!
//! - [`SourceFormat`]: which decoder a file extension selects
//! - [`ParseError`]: everything that can go wrong loading a document

pub mod error;

pub use error::{ParseError, ParseResult};

use std::fs;
use std::path::Path;

use confdiff_tree::Document;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// The source formats a document can be decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Pick the decoder from a file extension.
    ///
    /// Matching is exact: `.json` selects JSON, `.yaml` and `.yml` select
    /// YAML, and anything else, including case variants like `.JSON`, is
    /// rejected.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        match extension {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            other => Err(ParseError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }

    /// The canonical name of this source format.
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Load the two documents a diff is computed over.
pub fn parse_documents(path_a: &Path, path_b: &Path) -> ParseResult<(Document, Document)> {
    Ok((parse_file(path_a)?, parse_file(path_b)?))
}

/// Load and decode one document, picking the decoder from the file
/// extension.
pub fn parse_file(path: &Path) -> ParseResult<Document> {
    let format = SourceFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_str(format, &text).map_err(|source| ParseError::InFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    debug!(
        path = %path.display(),
        format = %format,
        entries = document.len(),
        "decoded document"
    );
    Ok(document)
}

/// Decode `text` as a single configuration document.
///
/// JSON input must hold exactly one object. YAML input may hold any number
/// of documents: null documents are skipped, the rest must be mappings and
/// are deep-merged left to right, and an empty stream yields an empty
/// document. Numbers are normalized after decoding.
pub fn parse_str(format: SourceFormat, text: &str) -> ParseResult<Document> {
    let mut document = match format {
        SourceFormat::Json => parse_json(text)?,
        SourceFormat::Yaml => parse_yaml(text)?,
    };
    for value in document.values_mut() {
        normalize_numbers(value);
    }
    Ok(document)
}

fn parse_json(text: &str) -> ParseResult<Document> {
    let value: Value = serde_json::from_str(text)?;
    into_mapping(value)
}

fn parse_yaml(text: &str) -> ParseResult<Document> {
    let mut documents = Vec::new();
    for deserializer in serde_yaml::Deserializer::from_str(text) {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            // Empty and explicitly null documents contribute nothing.
            continue;
        }
        documents.push(into_mapping(value)?);
    }
    Ok(merge_documents(documents))
}

fn into_mapping(value: Value) -> ParseResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::RootNotMapping {
            kind: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Deep-merge mappings left to right into one document.
///
/// Later values win, except that when both sides hold a mapping under the
/// same key the two are merged recursively instead of replaced.
pub fn merge_documents<I>(documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    let mut merged = Document::new();
    for document in documents {
        merge_into(&mut merged, document);
    }
    merged
}

fn merge_into(base: &mut Document, overlay: Document) {
    for (key, incoming) in overlay {
        let value = match (base.remove(&key), incoming) {
            (Some(Value::Object(mut below)), Value::Object(above)) => {
                merge_into(&mut below, above);
                Value::Object(below)
            }
            (_, incoming) => incoming,
        };
        base.insert(key, value);
    }
}

/// Normalize numbers in place so whole-valued floats become integers.
///
/// A float with zero fractional part that fits an `i64` exactly is replaced
/// by that integer, making `1` and `1.0` structurally equal no matter how a
/// source spelled them. Every other number is left untouched.
pub fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            if let Some(float) = number.as_f64() {
                if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
                    *value = Value::from(float as i64);
                }
            }
        }
        Value::Object(map) => {
            for child in map.values_mut() {
                normalize_numbers(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                normalize_numbers(item);
            }
        }
        _ => {}
    }
}
