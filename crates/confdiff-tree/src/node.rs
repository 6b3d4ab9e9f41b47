//! The diff tree node: a closed sum over the five change kinds.
//!
//! Each variant carries exactly the payload its kind needs, so illegal
//! states (a nested node with a scalar payload, an addition with an old
//! value) are unrepresentable.

use serde_json::Value;

/// One classified entry in a diff tree.
///
/// Node sequences are sorted by key in ascending byte-lexicographic order at
/// every level, and a key appears at most once per level. Both properties
/// are guaranteed by [`build_diff`](crate::build_diff).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffNode {
    /// The key is absent in the first document and present in the second.
    Added {
        /// The key under comparison.
        key: String,
        /// The value introduced by the second document.
        new: Value,
    },
    /// The key is present in the first document and absent in the second.
    Removed {
        /// The key under comparison.
        key: String,
        /// The value the first document held.
        old: Value,
    },
    /// The key is present in both documents with structurally equal values.
    Unchanged {
        /// The key under comparison.
        key: String,
        /// The shared value.
        value: Value,
    },
    /// The key is present in both documents with differing values.
    ///
    /// A scalar on one side and a mapping on the other is always an update,
    /// never a recursive diff.
    Updated {
        /// The key under comparison.
        key: String,
        /// The value from the first document.
        old: Value,
        /// The value from the second document.
        new: Value,
    },
    /// The key holds a mapping on both sides; the diff recursed into them.
    Nested {
        /// The key under comparison.
        key: String,
        /// The diff of the two sub-mappings, sorted by key.
        children: Vec<DiffNode>,
    },
}

impl DiffNode {
    /// The key this node describes.
    pub fn key(&self) -> &str {
        match self {
            DiffNode::Added { key, .. }
            | DiffNode::Removed { key, .. }
            | DiffNode::Unchanged { key, .. }
            | DiffNode::Updated { key, .. }
            | DiffNode::Nested { key, .. } => key,
        }
    }

    /// The lowercase kind tag used by the machine-readable output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DiffNode::Added { .. } => "added",
            DiffNode::Removed { .. } => "removed",
            DiffNode::Unchanged { .. } => "unchanged",
            DiffNode::Updated { .. } => "updated",
            DiffNode::Nested { .. } => "nested",
        }
    }
}

/// Number of effective changes in a node tree.
///
/// Added, removed, and updated nodes count once each; nested nodes recurse;
/// unchanged nodes count zero.
pub fn change_count(nodes: &[DiffNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            DiffNode::Added { .. } | DiffNode::Removed { .. } | DiffNode::Updated { .. } => 1,
            DiffNode::Nested { children, .. } => change_count(children),
            DiffNode::Unchanged { .. } => 0,
        })
        .sum()
}
