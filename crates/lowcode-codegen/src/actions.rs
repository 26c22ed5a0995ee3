//! Compilation of event action lists into handler functions.

use crate::escape;
use crate::naming::{handler_name, ref_name};
use crate::options::GeneratorOptions;
use lowcode_core::{Action, ActionList, ComponentNode, NodeId};

/// A generated event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub name: String,
    pub node_id: NodeId,
    pub event: String,
    /// One statement per compiled action, in action order.
    pub statements: Vec<String>,
}

impl Handler {
    /// Render at component-body indentation.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.statements.len() + 2);
        lines.push(format!("  const {} = () => {{", self.name));
        for statement in &self.statements {
            lines.push(format!("    {}", statement));
        }
        lines.push("  };".to_string());
        lines.join("\n")
    }
}

/// Compile one action into a statement. Unsupported actions yield nothing.
pub fn compile_action(action: &Action, options: &GeneratorOptions) -> Option<String> {
    match action {
        Action::ComponentMethod {
            component_id,
            method,
        } => Some(format!("{}.current?.{}();", ref_name(*component_id), method)),
        Action::DomOperation {
            component_id,
            operation,
        } => Some(format!("{}.current?.{};", ref_name(*component_id), operation)),
        Action::ShowMessage { kind, text } => {
            let text = if options.escape_literals {
                escape::js_single_quoted(text)
            } else {
                text.into()
            };
            Some(format!("message.{}('{}');", kind, text))
        }
        Action::Unsupported(value) => {
            tracing::debug!(action = %value, "dropping unsupported action");
            None
        }
    }
}

/// Compile a whole action list into a handler named after the node and event.
pub fn compile_list(
    node_id: NodeId,
    event: &str,
    actions: &ActionList,
    options: &GeneratorOptions,
) -> Handler {
    Handler {
        name: handler_name(node_id, event),
        node_id,
        event: event.to_string(),
        statements: actions
            .actions
            .iter()
            .filter_map(|action| compile_action(action, options))
            .collect(),
    }
}

/// Compile the handler for `event` on `node`.
///
/// Returns `None` when the prop is missing or is not an action list.
pub fn compile_handler(node: &ComponentNode, event: &str, options: &GeneratorOptions) -> Option<Handler> {
    let actions = node.prop(event)?.as_actions()?;
    Some(compile_list(node.id, event, actions, options))
}
