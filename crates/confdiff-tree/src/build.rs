//! The diff builder: classify every key in the union of two documents.
//!
//! Ordering is an explicit contract: the key union is re-derived and sorted
//! on every call, never inherited from map iteration order. Classification
//! follows the presence/equality rules, recursing only when both sides hold
//! a mapping.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::node::DiffNode;
use crate::Document;

/// Compare two documents and produce the ordered diff tree.
///
/// Keys present only in `a` are `Removed`, keys present only in `b` are
/// `Added`. Keys present in both recurse into a `Nested` node when both
/// values are mappings; otherwise structurally equal values are `Unchanged`
/// and differing values are `Updated`. The result is sorted by key in
/// ascending byte-lexicographic order at every level.
///
/// Total over any two well-formed documents, including empty ones. Pure:
/// no I/O, no shared state. Recursion depth is bounded only by document
/// depth; callers feeding pathologically deep untrusted input are
/// responsible for guarding it.
///
/// # Examples
///
/// ```
/// use confdiff_tree::{build_diff, DiffNode};
/// use serde_json::json;
///
/// let a = json!({"host": "prod.example"});
/// let b = json!({"host": "stage.example"});
/// let nodes = build_diff(a.as_object().unwrap(), b.as_object().unwrap());
/// assert!(matches!(&nodes[0], DiffNode::Updated { .. }));
/// ```
pub fn build_diff(a: &Document, b: &Document) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();

    let mut nodes = Vec::with_capacity(keys.len());
    for key in keys {
        let node = match (a.get(key), b.get(key)) {
            (Some(old), None) => DiffNode::Removed {
                key: key.clone(),
                old: old.clone(),
            },
            (None, Some(new)) => DiffNode::Added {
                key: key.clone(),
                new: new.clone(),
            },
            (Some(Value::Object(sub_a)), Some(Value::Object(sub_b))) => DiffNode::Nested {
                key: key.clone(),
                children: build_diff(sub_a, sub_b),
            },
            (Some(old), Some(new)) if old == new => DiffNode::Unchanged {
                key: key.clone(),
                value: old.clone(),
            },
            (Some(old), Some(new)) => DiffNode::Updated {
                key: key.clone(),
                old: old.clone(),
                new: new.clone(),
            },
            (None, None) => unreachable!("key comes from the union of both documents"),
        };
        nodes.push(node);
    }
    nodes
}


#[cfg(test)]
mod props {
    use super::*;
    use crate::node::change_count;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-100i64..100).prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,4}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_document() -> impl Strategy<Value = Document> {
        prop::collection::btree_map("[a-f]", arb_value(), 0..6)
            .prop_map(|m| m.into_iter().collect())
    }

    fn assert_sorted(nodes: &[DiffNode]) {
        for pair in nodes.windows(2) {
            assert!(
                pair[0].key() < pair[1].key(),
                "keys out of order: {:?} before {:?}",
                pair[0].key(),
                pair[1].key()
            );
        }
        for node in nodes {
            if let DiffNode::Nested { children, .. } = node {
                assert_sorted(children);
            }
        }
    }

    proptest! {
        #[test]
        fn keys_strictly_ascending_at_every_level(a in arb_document(), b in arb_document()) {
            assert_sorted(&build_diff(&a, &b));
        }

        #[test]
        fn every_union_key_appears_exactly_once(a in arb_document(), b in arb_document()) {
            let nodes = build_diff(&a, &b);
            let expected: Vec<&str> = a
                .keys()
                .chain(b.keys())
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .map(String::as_str)
                .collect();
            let got: Vec<&str> = nodes.iter().map(DiffNode::key).collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn builder_is_deterministic(a in arb_document(), b in arb_document()) {
            prop_assert_eq!(build_diff(&a, &b), build_diff(&a, &b));
        }

        #[test]
        fn self_diff_reports_no_changes(a in arb_document()) {
            prop_assert_eq!(change_count(&build_diff(&a, &a)), 0);
        }

        #[test]
        fn mapping_pairs_always_recurse(a in arb_document(), b in arb_document()) {
            let nodes = build_diff(&a, &b);
            for node in &nodes {
                let (Some(va), Some(vb)) = (a.get(node.key()), b.get(node.key())) else {
                    continue;
                };
                if let (Value::Object(sub_a), Value::Object(sub_b)) = (va, vb) {
                    match node {
                        DiffNode::Nested { children, .. } => {
                            prop_assert_eq!(children, &build_diff(sub_a, sub_b));
                        }
                        other => prop_assert!(false, "expected Nested for a mapping pair, got {:?}", other),
                    }
                }
            }
        }
    }
}
