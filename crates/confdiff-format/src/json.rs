//! The machine-readable renderer: the diff tree as a JSON document.
//!
//! Each node becomes an object carrying its key, its change type, and only
//! the value fields its kind defines; absent fields are omitted rather than
//! serialized as null. The node array sits under a fixed top-level `diff`
//! key so metadata can be added alongside later without breaking consumers.

use confdiff_tree::DiffNode;
use serde::Serialize;
use serde_json::Value;

use crate::error::FormatResult;

#[derive(Serialize)]
struct Output<'a> {
    diff: Vec<JsonNode<'a>>,
}

/// One encoded diff node. Which optional fields are populated depends on
/// the node kind.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode<'a> {
    key: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<JsonNode<'a>>>,
}

/// Render the diff tree as pretty-printed JSON under a top-level `diff` key.
pub fn render(nodes: &[DiffNode]) -> FormatResult<String> {
    let output = Output {
        diff: encode(nodes),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn encode(nodes: &[DiffNode]) -> Vec<JsonNode<'_>> {
    nodes.iter().map(encode_node).collect()
}

fn encode_node(node: &DiffNode) -> JsonNode<'_> {
    let mut encoded = JsonNode {
        key: node.key(),
        kind: node.kind_name(),
        old_value: None,
        new_value: None,
        children: None,
    };
    match node {
        DiffNode::Added { new, .. } => encoded.new_value = Some(new),
        DiffNode::Removed { old, .. } => encoded.old_value = Some(old),
        DiffNode::Updated { old, new, .. } => {
            encoded.old_value = Some(old);
            encoded.new_value = Some(new);
        }
        DiffNode::Unchanged { value, .. } => encoded.old_value = Some(value),
        DiffNode::Nested { children, .. } => encoded.children = Some(encode(children)),
    }
    encoded
}
