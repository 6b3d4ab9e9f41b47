//! Diff tree construction for confdiff.
//!
//! Compares two normalized configuration documents and produces an ordered
//! tree of [`DiffNode`]s describing every key in the union of both documents.
//! The builder is pure: no I/O, no shared state, deterministic output.
//!
//! # Key Types
//!
//! - [`Document`] -- A decoded configuration mapping (string keys to values)
//! - [`DiffNode`] -- One classified entry of the diff tree (added/removed/
//!   unchanged/updated/nested)
//! - [`build_diff`] -- The builder: two documents in, sorted node tree out

pub mod build;
pub mod node;

pub use build::build_diff;
pub use node::{change_count, DiffNode};

/// A normalized configuration document: string keys mapped to JSON values.
///
/// Nested mappings inside a value use the same map type, so recursion over
/// document levels is uniform. The map is BTreeMap-backed; key iteration is
/// always in ascending byte-lexicographic order.
pub type Document = serde_json::Map<String, serde_json::Value>;
