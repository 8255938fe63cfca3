//! Read-only traversal of `scene/query-node-tree` results.
//!
//! The editor returns the whole scene graph in one JSON tree. Nodes carry
//! either plain fields (`"name": "Player"`) or inspector dump fields
//! (`"name": {"value": "Player"}`) depending on editor version; both forms
//! are handled here.

use itertools::Itertools;
use serde_json::{Map, Value, json};

/// One match from a tree search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeHit {
    /// Node name
    pub name: String,
    /// Node UUID
    pub uuid: String,
    /// Slash-separated path from the tree root
    pub path: String,
}

/// Read a string field that may be plain or dump-wrapped
fn field_str<'a>(node: &'a Value, field: &str) -> Option<&'a str> {
    let value = node.get(field)?;
    value
        .as_str()
        .or_else(|| value.get("value").and_then(Value::as_str))
}

fn children(node: &Value) -> &[Value] {
    node.get("children")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

fn name_matches(name: &str, pattern: &str, exact: bool) -> bool {
    if exact {
        name == pattern
    } else {
        name.to_lowercase().contains(&pattern.to_lowercase())
    }
}

/// Recursively search the tree for nodes whose name matches `pattern`.
///
/// `max_depth` counts levels below the root (`Some(0)` checks the root
/// only, `None` is unlimited). Search stops once `limit` hits are found.
pub fn search_tree(
    root: &Value,
    pattern: &str,
    exact: bool,
    max_depth: Option<u32>,
    limit: usize,
) -> Vec<NodeHit> {
    let mut hits = Vec::new();
    let mut path = Vec::new();
    search_node(root, pattern, exact, max_depth, limit, 0, &mut path, &mut hits);
    hits
}

fn search_node(
    node: &Value,
    pattern: &str,
    exact: bool,
    max_depth: Option<u32>,
    limit: usize,
    depth: u32,
    path: &mut Vec<String>,
    hits: &mut Vec<NodeHit>,
) {
    if hits.len() >= limit {
        return;
    }

    let name = field_str(node, "name").unwrap_or_default().to_string();
    path.push(name.clone());

    if name_matches(&name, pattern, exact)
        && let Some(uuid) = field_str(node, "uuid")
    {
        hits.push(NodeHit {
            name: name.clone(),
            uuid: uuid.to_string(),
            path: path.iter().join("/"),
        });
    }

    let descend = max_depth.is_none_or(|max| depth < max);
    if descend {
        for child in children(node) {
            search_node(child, pattern, exact, max_depth, limit, depth + 1, path, hits);
        }
    }

    path.pop();
}

/// Find the first node with an exact name match and return its UUID
pub fn find_by_name(root: &Value, name: &str) -> Option<String> {
    search_tree(root, name, true, None, 1)
        .into_iter()
        .next()
        .map(|hit| hit.uuid)
}

/// Prune a node tree to `max_depth` levels below the root.
///
/// Each retained node keeps its identifying fields; where pruning removed
/// children a `children_truncated` marker is left so the caller knows to
/// query deeper.
pub fn prune_tree(root: &Value, max_depth: Option<u32>) -> Value {
    prune_node(root, max_depth, 0)
}

fn prune_node(node: &Value, max_depth: Option<u32>, depth: u32) -> Value {
    let mut pruned = Map::new();
    for field in ["name", "uuid", "type", "active"] {
        if let Some(value) = node.get(field) {
            // Unwrap dump form so the output is flat
            let flat = value.get("value").cloned().unwrap_or_else(|| value.clone());
            pruned.insert(field.to_string(), flat);
        }
    }

    let child_nodes = children(node);
    let descend = max_depth.is_none_or(|max| depth < max);
    if descend {
        let pruned_children: Vec<Value> = child_nodes
            .iter()
            .map(|child| prune_node(child, max_depth, depth + 1))
            .collect();
        pruned.insert("children".to_string(), Value::Array(pruned_children));
    } else if !child_nodes.is_empty() {
        pruned.insert("children".to_string(), json!([]));
        pruned.insert("children_truncated".to_string(), Value::Bool(true));
    } else {
        pruned.insert("children".to_string(), json!([]));
    }

    Value::Object(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Value {
        json!({
            "name": "Scene",
            "uuid": "scene-1",
            "type": "cc.Scene",
            "active": true,
            "children": [
                {
                    "name": "Canvas",
                    "uuid": "canvas-1",
                    "type": "cc.Node",
                    "active": true,
                    "children": [
                        {
                            "name": {"value": "ScoreLabel"},
                            "uuid": {"value": "label-1"},
                            "type": "cc.Node",
                            "active": true,
                            "children": []
                        },
                        {
                            "name": "PauseButton",
                            "uuid": "button-1",
                            "type": "cc.Node",
                            "active": false,
                            "children": []
                        }
                    ]
                },
                {
                    "name": "Main Camera",
                    "uuid": "camera-1",
                    "type": "cc.Node",
                    "active": true,
                    "children": []
                }
            ]
        })
    }

    #[test]
    fn test_search_substring_is_case_insensitive() {
        let hits = search_tree(&sample_tree(), "label", false, None, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].uuid, "label-1");
        assert_eq!(hits[0].path, "Scene/Canvas/ScoreLabel");
    }

    #[test]
    fn test_search_exact_match() {
        let hits = search_tree(&sample_tree(), "Canvas", true, None, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].uuid, "canvas-1");
    }

    #[test]
    fn test_search_depth_limit() {
        // Depth 1 covers Scene and its direct children only
        let hits = search_tree(&sample_tree(), "ScoreLabel", false, Some(1), 10);
        assert!(hits.is_empty());

        let hits = search_tree(&sample_tree(), "Canvas", false, Some(1), 10);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_respects_limit() {
        // Four node names contain an 'a'; the limit keeps the first two
        let hits = search_tree(&sample_tree(), "a", false, None, 2);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(
            find_by_name(&sample_tree(), "Canvas"),
            Some("canvas-1".to_string())
        );
        assert_eq!(find_by_name(&sample_tree(), "Nope"), None);
    }

    #[test]
    fn test_prune_zero_keeps_root_only() {
        let pruned = prune_tree(&sample_tree(), Some(0));
        assert_eq!(pruned["name"], "Scene");
        assert_eq!(pruned["children"], json!([]));
        assert_eq!(pruned["children_truncated"], true);
    }

    #[test]
    fn test_prune_unwraps_dump_fields() {
        let pruned = prune_tree(&sample_tree(), None);
        let label = &pruned["children"][0]["children"][0];
        assert_eq!(label["name"], "ScoreLabel");
        assert_eq!(label["uuid"], "label-1");
        assert!(label.get("children_truncated").is_none());
    }

    #[test]
    fn test_prune_marks_truncation_only_where_children_cut() {
        let pruned = prune_tree(&sample_tree(), Some(1));
        let canvas = &pruned["children"][0];
        assert_eq!(canvas["children_truncated"], true);
        let camera = &pruned["children"][1];
        assert!(camera.get("children_truncated").is_none());
    }
}
