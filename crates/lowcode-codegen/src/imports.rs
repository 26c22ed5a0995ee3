//! Component import collection.

use crate::options::GeneratorOptions;
use indexmap::IndexSet;
use lowcode_core::{tree, ComponentNode};

/// Distinct component names in pre-order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: IndexSet<String>,
}

impl ImportSet {
    /// Collect every component name in the tree, roots and descendants.
    pub fn collect(components: &[ComponentNode]) -> Self {
        let names = tree::walk(components)
            .map(|node| node.name.clone())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Import lines: one grouped line for library widgets, then one default
    /// import per local component.
    pub fn render(&self, options: &GeneratorOptions) -> Vec<String> {
        let (library, local): (Vec<&str>, Vec<&str>) = self
            .names()
            .partition(|name| options.is_library_component(name));

        let mut lines = Vec::with_capacity(local.len() + 1);
        if !library.is_empty() {
            lines.push(format!(
                "import {{ {} }} from '{}';",
                library.join(", "),
                options.library_module
            ));
        }
        for name in local {
            lines.push(format!("import {} from '{}';", name, options.local_path(name)));
        }
        lines
    }
}
