//! Editing operations over a component tree, recorded into a [`History`].
//!
//! Every successful edit commits a new snapshot. The code generator never
//! sees the store; it is handed [`ComponentStore::snapshot`].

use crate::errors::{ModelError, Result};
use crate::history::{History, Snapshot};
use crate::node::{ComponentNode, NodeId, Props, Styles};
use crate::tree;
use std::collections::HashSet;

/// The editor's component tree together with its undo/redo history.
#[derive(Debug, Clone)]
pub struct ComponentStore {
    history: History,
}

impl ComponentStore {
    pub fn new(components: Vec<ComponentNode>) -> Self {
        Self {
            history: History::new(components),
        }
    }

    /// Use an existing history (for example one with a size limit).
    pub fn with_history(history: History) -> Self {
        Self { history }
    }

    pub fn components(&self) -> &[ComponentNode] {
        self.history.current()
    }

    /// Shared handle to the current tree.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::clone(self.history.current())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn find(&self, id: NodeId) -> Option<&ComponentNode> {
        tree::find(self.components(), id)
    }

    /// Add a node at the root, or as the last child of `parent_id`.
    pub fn add_component(&mut self, mut component: ComponentNode, parent_id: Option<NodeId>) -> Result<()> {
        let mut components = self.components().to_vec();
        let existing: HashSet<NodeId> = tree::walk(&components).map(|node| node.id).collect();
        if let Some(id) = tree::walk(std::slice::from_ref(&component))
            .map(|node| node.id)
            .find(|id| existing.contains(id))
        {
            return Err(ModelError::DuplicateId(id));
        }

        match parent_id {
            Some(parent_id) => {
                let parent = tree::find_mut(&mut components, parent_id)
                    .ok_or(ModelError::ParentNotFound(parent_id))?;
                component.parent_id = Some(parent_id);
                parent.children.get_or_insert_with(Vec::new).push(component);
            }
            None => {
                component.parent_id = None;
                components.push(component);
            }
        }

        self.history.commit(components);
        Ok(())
    }

    /// Remove a node and its subtree, returning it.
    pub fn delete_component(&mut self, id: NodeId) -> Result<ComponentNode> {
        let mut components = self.components().to_vec();
        let removed = tree::remove(&mut components, id).ok_or(ModelError::ComponentNotFound(id))?;
        self.history.commit(components);
        Ok(removed)
    }

    /// Merge `props` over the node's props. Existing keys keep their position.
    pub fn update_props(&mut self, id: NodeId, props: Props) -> Result<()> {
        self.edit(id, |node| node.props.extend(props))
    }

    /// Merge `styles` over the node's styles, or replace them outright.
    pub fn update_styles(&mut self, id: NodeId, styles: Styles, replace: bool) -> Result<()> {
        self.edit(id, |node| {
            if replace {
                node.styles = Some(styles);
            } else {
                node.styles.get_or_insert_with(Styles::new).extend(styles);
            }
        })
    }

    /// Replace the whole tree.
    pub fn set_components(&mut self, components: Vec<ComponentNode>) {
        self.history.commit(components);
    }

    /// Replace the whole tree with a JSON document.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let components = tree::parse_components(json)?;
        self.set_components(components);
        Ok(())
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn edit(&mut self, id: NodeId, apply: impl FnOnce(&mut ComponentNode)) -> Result<()> {
        let mut components = self.components().to_vec();
        let node = tree::find_mut(&mut components, id).ok_or(ModelError::ComponentNotFound(id))?;
        apply(node);
        self.history.commit(components);
        Ok(())
    }
}

impl Default for ComponentStore {
    /// A store holding a single empty page, as a fresh editor does.
    fn default() -> Self {
        Self::new(vec![ComponentNode::new(1, "Page").with_desc("Page")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;
    use serde_json::json;

    #[test]
    fn test_default_store_has_page() {
        let store = ComponentStore::default();
        assert_eq!(store.components().len(), 1);
        assert_eq!(store.components()[0].name, "Page");
        assert!(!store.can_undo());
    }

    #[test]
    fn test_add_under_parent_and_undo() {
        let mut store = ComponentStore::default();
        store.add_component(ComponentNode::new(2, "Button"), Some(1)).unwrap();

        let page = store.find(1).unwrap();
        assert_eq!(page.children()[0].id, 2);
        assert_eq!(page.children()[0].parent_id, Some(1));

        assert!(store.undo());
        assert!(store.find(2).is_none());
        assert!(store.redo());
        assert!(store.find(2).is_some());
    }

    #[test]
    fn test_add_rejects_duplicate_and_missing_parent() {
        let mut store = ComponentStore::default();
        let err = store.add_component(ComponentNode::new(1, "Text"), None).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateId(1)));

        let err = store.add_component(ComponentNode::new(2, "Text"), Some(42)).unwrap_err();
        assert!(matches!(err, ModelError::ParentNotFound(42)));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_delete_nested() {
        let mut store = ComponentStore::default();
        store.add_component(ComponentNode::new(2, "Container"), Some(1)).unwrap();
        store.add_component(ComponentNode::new(3, "Text"), Some(2)).unwrap();

        let removed = store.delete_component(2).unwrap();
        assert_eq!(removed.children()[0].id, 3);
        assert!(store.find(3).is_none());
        assert!(matches!(
            store.delete_component(2),
            Err(ModelError::ComponentNotFound(2))
        ));
    }

    #[test]
    fn test_update_props_merges() {
        let mut store = ComponentStore::new(vec![ComponentNode::new(1, "Button")
            .with_prop("type", "primary")
            .with_prop("text", "Go")]);

        let mut patch = Props::new();
        patch.insert("type".into(), PropValue::string("default"));
        patch.insert("size".into(), PropValue::string("small"));
        store.update_props(1, patch).unwrap();

        let node = store.find(1).unwrap();
        assert_eq!(node.props.keys().collect::<Vec<_>>(), vec!["type", "text", "size"]);
        assert_eq!(node.prop("type"), Some(&PropValue::string("default")));
    }

    #[test]
    fn test_update_styles_merge_and_replace() {
        let mut store = ComponentStore::new(vec![ComponentNode::new(1, "Text").with_style("color", "red")]);

        let mut patch = Styles::new();
        patch.insert("fontSize".into(), json!(14));
        store.update_styles(1, patch.clone(), false).unwrap();
        assert_eq!(store.find(1).unwrap().styles.as_ref().unwrap().len(), 2);

        store.update_styles(1, patch, true).unwrap();
        let styles = store.find(1).unwrap().styles.clone().unwrap();
        assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["fontSize"]);
    }

    #[test]
    fn test_import_json_is_undoable() {
        let mut store = ComponentStore::default();
        store
            .import_json(r#"[{"id": 7, "name": "Form", "props": {}}]"#)
            .unwrap();
        assert_eq!(store.components()[0].id, 7);

        assert!(store.import_json(r#"{"id": 8}"#).is_err());
        assert_eq!(store.components()[0].id, 7);

        store.undo();
        assert_eq!(store.components()[0].name, "Page");
    }
}
