//! Traversal, lookup and JSON import of component trees.

use crate::errors::{ModelError, Result};
use crate::node::{ComponentNode, NodeId};
use serde_json::Value;
use std::collections::HashSet;

/// Parse the editor's JSON document into a root sequence.
///
/// The top level must be an array of components.
pub fn parse_components(json: &str) -> Result<Vec<ComponentNode>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ModelError::NotAnArray {
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a root sequence with two-space indentation.
pub fn to_json(components: &[ComponentNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(components)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Depth-first, pre-order iterator over a root sequence.
pub struct PreOrder<'a> {
    stack: Vec<&'a ComponentNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a ComponentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Visit every node, roots first, children in array order.
pub fn walk(components: &[ComponentNode]) -> PreOrder<'_> {
    PreOrder {
        stack: components.iter().rev().collect(),
    }
}

/// Find a node anywhere in the tree.
pub fn find(components: &[ComponentNode], id: NodeId) -> Option<&ComponentNode> {
    walk(components).find(|node| node.id == id)
}

/// Find a node anywhere in the tree, mutably.
pub fn find_mut(components: &mut [ComponentNode], id: NodeId) -> Option<&mut ComponentNode> {
    for node in components.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = find_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Whether `id` belongs to a root-level node.
pub fn is_root(components: &[ComponentNode], id: NodeId) -> bool {
    components.iter().any(|node| node.id == id)
}

/// Detach a node (and its subtree) from wherever it sits.
pub fn remove(components: &mut Vec<ComponentNode>, id: NodeId) -> Option<ComponentNode> {
    if let Some(index) = components.iter().position(|node| node.id == id) {
        return Some(components.remove(index));
    }
    components
        .iter_mut()
        .filter_map(|node| node.children.as_mut())
        .find_map(|children| remove(children, id))
}

/// Ids that occur more than once, in first-repeat order.
pub fn duplicate_ids(components: &[ComponentNode]) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for node in walk(components) {
        if !seen.insert(node.id) && !duplicates.contains(&node.id) {
            duplicates.push(node.id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ComponentNode> {
        vec![
            ComponentNode::new(1, "Page")
                .with_child(
                    ComponentNode::new(2, "Container")
                        .with_child(ComponentNode::new(3, "Text"))
                        .with_child(ComponentNode::new(4, "Button")),
                )
                .with_child(ComponentNode::new(5, "Table")),
            ComponentNode::new(6, "Modal"),
        ]
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = sample();
        let ids: Vec<NodeId> = walk(&tree).map(|node| node.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_nested() {
        let tree = sample();
        assert_eq!(find(&tree, 4).map(|n| n.name.as_str()), Some("Button"));
        assert!(find(&tree, 99).is_none());
        assert!(is_root(&tree, 6));
        assert!(!is_root(&tree, 3));
    }

    #[test]
    fn test_find_mut_and_remove() {
        let mut tree = sample();
        find_mut(&mut tree, 3).unwrap().desc = "label".into();
        assert_eq!(find(&tree, 3).unwrap().desc, "label");

        let removed = remove(&mut tree, 2).unwrap();
        assert_eq!(removed.children().len(), 2);
        let ids: Vec<NodeId> = walk(&tree).map(|node| node.id).collect();
        assert_eq!(ids, vec![1, 5, 6]);
    }

    #[test]
    fn test_parse_components_requires_array() {
        let err = parse_components(r#"{"id": 1, "name": "Page"}"#).unwrap_err();
        assert!(matches!(err, ModelError::NotAnArray { found: "an object" }));
        assert!(err.to_string().contains("JSON array"));

        let err = parse_components("not json").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_parse_components() {
        let tree = parse_components(
            r#"[
                {"id": 1, "name": "Page", "props": {}, "desc": "Page", "children": [
                    {"id": 2, "name": "Text", "props": {"text": "Hi"}, "parentId": 1}
                ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children()[0].parent_id, Some(1));
    }

    #[test]
    fn test_duplicate_ids() {
        let tree = vec![
            ComponentNode::new(1, "Page").with_child(ComponentNode::new(2, "Text")),
            ComponentNode::new(2, "Button"),
            ComponentNode::new(2, "Input"),
        ];
        assert_eq!(duplicate_ids(&tree), vec![2]);
        assert!(duplicate_ids(&sample()).is_empty());
    }
}
