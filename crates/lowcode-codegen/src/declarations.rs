//! State and ref declarations derived from the tree.
//!
//! State is declared for root-level nodes carrying a `value` prop. Refs are
//! declared for every root-level node, or for every node when
//! [`GeneratorOptions::nested_refs`] is set.

use crate::escape;
use crate::naming::{ref_name, setter_name};
use crate::options::GeneratorOptions;
use lowcode_core::{tree, ComponentNode, Literal, NodeId, PropValue};

/// Getter used when a stateful node has no usable `name` prop.
pub const MISSING_STATE_NAME: &str = "undefined";

/// `const [getter, setter] = useState(initial);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDeclaration {
    pub node_id: NodeId,
    pub getter: String,
    pub setter: String,
    pub initial: String,
}

impl StateDeclaration {
    pub fn render(&self) -> String {
        format!(
            "const [{}, {}] = useState({});",
            self.getter, self.setter, self.initial
        )
    }
}

/// `const <id>_ref = useRef<Component>(null);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefDeclaration {
    pub node_id: NodeId,
    pub name: String,
    pub component: String,
}

impl RefDeclaration {
    pub fn render(&self) -> String {
        format!("const {} = useRef<{}>(null);", self.name, self.component)
    }
}

/// The getter name a node's `name` prop yields, if it yields one.
pub fn state_name(node: &ComponentNode) -> Option<String> {
    node.prop("name")
        .and_then(PropValue::as_literal)
        .map(Literal::as_text)
}

/// State declarations for root-level nodes with a `value` prop.
pub fn state_declarations(components: &[ComponentNode], options: &GeneratorOptions) -> Vec<StateDeclaration> {
    components
        .iter()
        .filter_map(|node| {
            let value = node.prop("value")?;
            let (getter, setter) = match state_name(node) {
                Some(name) => {
                    let setter = setter_name(&name);
                    (name, setter)
                }
                None => {
                    tracing::warn!(
                        node = node.id,
                        component = %node.name,
                        "stateful node has no name prop; state identifiers collapse"
                    );
                    (MISSING_STATE_NAME.to_string(), "set".to_string())
                }
            };
            Some(StateDeclaration {
                node_id: node.id,
                getter,
                setter,
                initial: initial_value(value, options),
            })
        })
        .collect()
}

/// Ref declarations, one per declared node, in pre-order.
pub fn ref_declarations(components: &[ComponentNode], options: &GeneratorOptions) -> Vec<RefDeclaration> {
    let declare = |node: &ComponentNode| RefDeclaration {
        node_id: node.id,
        name: ref_name(node.id),
        component: node.name.clone(),
    };

    if options.nested_refs {
        tree::walk(components).map(declare).collect()
    } else {
        components.iter().map(declare).collect()
    }
}

fn initial_value(value: &PropValue, options: &GeneratorOptions) -> String {
    match value {
        PropValue::Literal(literal) => {
            let text = literal.as_text();
            if options.escape_literals {
                format!("'{}'", escape::js_single_quoted(&text))
            } else {
                format!("'{}'", text)
            }
        }
        PropValue::Bound(bound) => bound.expression(),
        PropValue::Actions(_) | PropValue::Unsupported(_) => value.to_json().to_string(),
    }
}
