//! The default renderer: a brace-delimited tree mirroring the documents.
//!
//! Each line carries a two-column change marker ahead of the key. `- ` marks
//! a value from the first document, `+ ` a value from the second, and two
//! spaces an entry present unchanged in both. Updated entries emit the old
//! line then the new line. Mapping and sequence values are expanded over
//! multiple lines with the same indentation mechanics as the tree itself, so
//! a mapping rendered as a value is indistinguishable from a nested level.

use confdiff_tree::DiffNode;
use serde_json::Value;

use crate::error::{FormatError, FormatResult};

const INDENT_WIDTH: usize = 4;

/// Leading spaces before the two-column marker slot of a line at `depth`.
fn indent(depth: usize) -> String {
    " ".repeat((depth * INDENT_WIDTH).saturating_sub(2))
}

/// Leading spaces of the closing brace that ends a level at `depth`.
fn closing_indent(depth: usize) -> String {
    " ".repeat(depth.saturating_sub(1) * INDENT_WIDTH)
}

/// Render the diff tree in the stylish format.
///
/// The output always opens with `{` and closes with `}` on its own line,
/// even for an empty tree.
pub fn render(nodes: &[DiffNode]) -> FormatResult<String> {
    render_level(nodes, 1)
}

fn render_level(nodes: &[DiffNode], depth: usize) -> FormatResult<String> {
    let base = indent(depth);
    let mut out = String::from("{\n");

    for node in nodes {
        match node {
            DiffNode::Unchanged { key, value } => {
                out.push_str(&format!("{base}  {key}: {}\n", stringify(value, depth + 1)));
            }
            DiffNode::Removed { key, old } => {
                out.push_str(&format!("{base}- {key}: {}\n", stringify(old, depth + 1)));
            }
            DiffNode::Added { key, new } => {
                out.push_str(&format!("{base}+ {key}: {}\n", stringify(new, depth + 1)));
            }
            DiffNode::Updated { key, old, new } => {
                out.push_str(&format!("{base}- {key}: {}\n", stringify(old, depth + 1)));
                out.push_str(&format!("{base}+ {key}: {}\n", stringify(new, depth + 1)));
            }
            DiffNode::Nested { key, children } => {
                let block =
                    render_level(children, depth + 1).map_err(|source| FormatError::Render {
                        key: key.clone(),
                        source: Box::new(source),
                    })?;
                out.push_str(&format!("{base}  {key}: {block}\n"));
            }
        }
    }

    out.push_str(&closing_indent(depth));
    out.push('}');
    Ok(out)
}

/// Stringify a value appearing on a line one level above `depth`.
///
/// Scalars use their literal form with strings unquoted. Mappings and
/// sequences expand to one element per line, keys in sorted order, with the
/// closing bracket aligned to the tree level above.
fn stringify(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let pad = indent(depth);
            let mut out = String::from("{\n");
            for (key, child) in map {
                out.push_str(&format!("{pad}  {key}: {}\n", stringify(child, depth + 1)));
            }
            out.push_str(&closing_indent(depth));
            out.push('}');
            out
        }
        Value::Array(items) => {
            let pad = indent(depth);
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&format!("{pad}  {}\n", stringify(item, depth + 1)));
            }
            out.push_str(&closing_indent(depth));
            out.push(']');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn added(key: &str, new: Value) -> DiffNode {
        DiffNode::Added {
            key: key.to_string(),
            new,
        }
    }

    fn removed(key: &str, old: Value) -> DiffNode {
        DiffNode::Removed {
            key: key.to_string(),
            old,
        }
    }

    fn unchanged(key: &str, value: Value) -> DiffNode {
        DiffNode::Unchanged {
            key: key.to_string(),
            value,
        }
    }

    fn updated(key: &str, old: Value, new: Value) -> DiffNode {
        DiffNode::Updated {
            key: key.to_string(),
            old,
            new,
        }
    }

    fn nested(key: &str, children: Vec<DiffNode>) -> DiffNode {
        DiffNode::Nested {
            key: key.to_string(),
            children,
        }
    }

    #[test]
    fn flat_tree_with_every_change_kind() {
        let nodes = vec![
            updated("a", json!(1), json!(0)),
            unchanged("b", json!(2)),
            added("c", json!(3)),
        ];
        let rendered = render(&nodes).unwrap();
        assert_eq!(rendered, "{\n  - a: 1\n  + a: 0\n    b: 2\n  + c: 3\n}");
    }

    #[test]
    fn removal_only_tree() {
        let nodes = vec![removed("only", json!(1))];
        assert_eq!(render(&nodes).unwrap(), "{\n  - only: 1\n}");
    }

    #[test]
    fn empty_tree_renders_bare_braces() {
        assert_eq!(render(&[]).unwrap(), "{\n}");
    }

    #[test]
    fn updated_emits_old_line_before_new_line() {
        let nodes = vec![updated("timeout", json!(50), json!(20))];
        assert_eq!(
            render(&nodes).unwrap(),
            "{\n  - timeout: 50\n  + timeout: 20\n}"
        );
    }

    #[test]
    fn strings_render_unquoted() {
        let nodes = vec![unchanged("name", json!("Value 1"))];
        assert_eq!(render(&nodes).unwrap(), "{\n    name: Value 1\n}");
    }

    #[test]
    fn null_renders_as_literal() {
        let nodes = vec![updated("default", json!(null), json!("boom"))];
        assert_eq!(
            render(&nodes).unwrap(),
            "{\n  - default: null\n  + default: boom\n}"
        );
    }

    #[test]
    fn numbers_keep_their_literal_form() {
        let nodes = vec![unchanged("port", json!(8080)), unchanged("pi", json!(52.15))];
        assert_eq!(
            render(&nodes).unwrap(),
            "{\n    port: 8080\n    pi: 52.15\n}"
        );
    }

    #[test]
    fn nested_level_indents_by_four_per_depth() {
        let nodes = vec![nested(
            "common",
            vec![
                added("follow", json!(false)),
                unchanged("setting1", json!("Value 1")),
            ],
        )];
        let expected = concat!(
            "{\n",
            "    common: {\n",
            "      + follow: false\n",
            "        setting1: Value 1\n",
            "    }\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }

    #[test]
    fn two_levels_of_nesting() {
        let nodes = vec![nested(
            "outer",
            vec![nested("inner", vec![updated("flag", json!(true), json!(false))])],
        )];
        let expected = concat!(
            "{\n",
            "    outer: {\n",
            "        inner: {\n",
            "          - flag: true\n",
            "          + flag: false\n",
            "        }\n",
            "    }\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }

    #[test]
    fn mapping_value_shares_tree_indentation() {
        let nodes = vec![added("obj", json!({"a": 1, "b": {"c": 2}}))];
        let expected = concat!(
            "{\n",
            "  + obj: {\n",
            "        a: 1\n",
            "        b: {\n",
            "            c: 2\n",
            "        }\n",
            "    }\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }

    #[test]
    fn mapping_value_inside_nested_level() {
        let nodes = vec![nested(
            "common",
            vec![added("setting5", json!({"key5": "value5"}))],
        )];
        let expected = concat!(
            "{\n",
            "    common: {\n",
            "      + setting5: {\n",
            "            key5: value5\n",
            "        }\n",
            "    }\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }

    #[test]
    fn sequence_value_renders_one_element_per_line() {
        let nodes = vec![updated("list", json!([1, 2]), json!(["x", {"k": true}]))];
        let expected = concat!(
            "{\n",
            "  - list: [\n",
            "        1\n",
            "        2\n",
            "    ]\n",
            "  + list: [\n",
            "        x\n",
            "        {\n",
            "            k: true\n",
            "        }\n",
            "    ]\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }

    #[test]
    fn empty_mapping_value_keeps_block_shape() {
        let nodes = vec![added("empty", json!({}))];
        assert_eq!(render(&nodes).unwrap(), "{\n  + empty: {\n    }\n}");
    }

    #[test]
    fn value_map_keys_come_out_sorted() {
        let nodes = vec![removed("cfg", json!({"zeta": 1, "alpha": 2}))];
        let expected = concat!(
            "{\n",
            "  - cfg: {\n",
            "        alpha: 2\n",
            "        zeta: 1\n",
            "    }\n",
            "}",
        );
        assert_eq!(render(&nodes).unwrap(), expected);
    }
}
