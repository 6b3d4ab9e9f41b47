//! The plain renderer: one sentence per leaf change, addressed by path.
//!
//! Nested entries contribute a dot-joined path segment instead of output of
//! their own, unchanged entries are dropped entirely, and composite values
//! collapse to a `[complex value]` placeholder. Rendering never fails.

use confdiff_tree::DiffNode;
use serde_json::Value;

/// Render the diff tree as flat property-change lines.
///
/// Every emitted line, including the last, is terminated with a newline.
/// An empty tree, or a tree with only unchanged entries, renders as the
/// empty string.
pub fn render(nodes: &[DiffNode]) -> String {
    let mut out = String::new();
    render_level(nodes, "", &mut out);
    out
}

fn render_level(nodes: &[DiffNode], parent: &str, out: &mut String) {
    for node in nodes {
        let path = join_path(parent, node.key());
        match node {
            DiffNode::Nested { children, .. } => render_level(children, &path, out),
            DiffNode::Removed { .. } => {
                out.push_str(&format!("Property '{path}' was removed\n"));
            }
            DiffNode::Added { new, .. } => {
                out.push_str(&format!(
                    "Property '{path}' was added with value: {}\n",
                    format_value(new)
                ));
            }
            DiffNode::Updated { old, new, .. } => {
                out.push_str(&format!(
                    "Property '{path}' was updated. From {} to {}\n",
                    format_value(old),
                    format_value(new)
                ));
            }
            DiffNode::Unchanged { .. } => {}
        }
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Shallow value form: composites collapse to a placeholder, strings are
/// single-quoted, scalars use their literal form.
fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => "[complex value]".to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}
