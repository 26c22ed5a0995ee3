//! The component tree node.

use crate::props::PropValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of a node, unique across the whole tree.
pub type NodeId = u64;

/// Ordered prop map.
pub type Props = IndexMap<String, PropValue>;

/// Ordered inline style map (CSS property name to value).
pub type Styles = IndexMap<String, Value>;

/// One entry in the UI composition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: NodeId,
    /// Component type name.
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Styles>,
    /// Label shown in the editor outline.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
}

impl ComponentNode {
    /// Create a node with no props, styles or children.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            props: Props::new(),
            styles: None,
            desc: String::new(),
            children: None,
            parent_id: None,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Add a prop, keeping insertion order.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Add a style entry, creating the style map if needed.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.styles
            .get_or_insert_with(Styles::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach an empty style map.
    pub fn with_empty_styles(mut self) -> Self {
        self.styles.get_or_insert_with(Styles::new);
        self
    }

    /// Append a child, recording this node as its parent.
    pub fn with_child(mut self, mut child: ComponentNode) -> Self {
        child.parent_id = Some(self.id);
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn has_prop(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Children in order; empty when the node has none.
    pub fn children(&self) -> &[ComponentNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
