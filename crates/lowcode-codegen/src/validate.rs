//! Eager checks over a component tree.
//!
//! Generation itself is best-effort and never consults these checks unless
//! [`GeneratorOptions::strict`] is set. The editor can run [`validate`] on its
//! own to surface problems before showing generated code.

use crate::declarations::{state_name, MISSING_STATE_NAME};
use crate::options::GeneratorOptions;
use lowcode_core::{tree, Action, ComponentNode, NodeId, PropValue};
use std::fmt;

pub use lowcode_core::is_identifier;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An action targets an id that is not in the tree.
    UnresolvedTarget { event: String, target: NodeId },
    /// An action targets a nested node that gets no ref declaration.
    UndeclaredReference { event: String, target: NodeId },
    /// A stateful node has no `name` prop.
    MissingStateName,
    /// A stateful node's name is not a valid identifier.
    InvalidStateName { name: String },
    /// The id occurs more than once in the tree.
    DuplicateId,
    /// An action in the list has an unknown or malformed shape and is
    /// dropped from the handler.
    UnsupportedAction { event: String, index: usize },
    /// An event prop holds a value that is neither an action list nor a
    /// literal or bound value, so it is omitted from the markup.
    UnsupportedEventValue { event: String },
}

/// One finding attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub node_id: NodeId,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    fn new(severity: Severity, node_id: NodeId, kind: DiagnosticKind) -> Self {
        Self {
            severity,
            node_id,
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on component {}: ", self.severity, self.node_id)?;
        match &self.kind {
            DiagnosticKind::UnresolvedTarget { event, target } => {
                write!(f, "{} targets component {} which does not exist", event, target)
            }
            DiagnosticKind::UndeclaredReference { event, target } => write!(
                f,
                "{} targets nested component {} which has no ref declaration",
                event, target
            ),
            DiagnosticKind::MissingStateName => {
                write!(f, "has a value but no name; state is declared as `{}`", MISSING_STATE_NAME)
            }
            DiagnosticKind::InvalidStateName { name } => {
                write!(f, "state name `{}` is not a valid identifier", name)
            }
            DiagnosticKind::DuplicateId => write!(f, "id is used by more than one component"),
            DiagnosticKind::UnsupportedAction { event, index } => write!(
                f,
                "{} action {} has an unsupported shape and is dropped",
                event, index
            ),
            DiagnosticKind::UnsupportedEventValue { event } => {
                write!(f, "{} holds an unsupported value and is omitted", event)
            }
        }
    }
}

/// Check a tree, returning findings in pre-order of the nodes they concern.
pub fn validate(components: &[ComponentNode], options: &GeneratorOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for id in tree::duplicate_ids(components) {
        diagnostics.push(Diagnostic::new(Severity::Warning, id, DiagnosticKind::DuplicateId));
    }

    for node in components.iter().filter(|node| node.has_prop("value")) {
        match state_name(node) {
            None => diagnostics.push(Diagnostic::new(
                Severity::Warning,
                node.id,
                DiagnosticKind::MissingStateName,
            )),
            Some(name) if !is_identifier(&name) => diagnostics.push(Diagnostic::new(
                Severity::Warning,
                node.id,
                DiagnosticKind::InvalidStateName { name },
            )),
            Some(_) => {}
        }
    }

    for node in tree::walk(components) {
        for (event, value) in &node.props {
            if !options.is_event(event) {
                continue;
            }
            let list = match value {
                PropValue::Actions(list) => list,
                PropValue::Unsupported(_) => {
                    diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        node.id,
                        DiagnosticKind::UnsupportedEventValue {
                            event: event.clone(),
                        },
                    ));
                    continue;
                }
                PropValue::Literal(_) | PropValue::Bound(_) => continue,
            };
            for (index, action) in list.actions.iter().enumerate() {
                if let Action::Unsupported(_) = action {
                    diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        node.id,
                        DiagnosticKind::UnsupportedAction {
                            event: event.clone(),
                            index,
                        },
                    ));
                }
            }
            for target in list.targets() {
                if tree::find(components, target).is_none() {
                    diagnostics.push(Diagnostic::new(
                        Severity::Error,
                        node.id,
                        DiagnosticKind::UnresolvedTarget {
                            event: event.clone(),
                            target,
                        },
                    ));
                } else if !options.nested_refs && !tree::is_root(components, target) {
                    diagnostics.push(Diagnostic::new(
                        Severity::Warning,
                        node.id,
                        DiagnosticKind::UndeclaredReference {
                            event: event.clone(),
                            target,
                        },
                    ));
                }
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowcode_core::{ActionList, MessageKind};
    use serde_json::json;

    fn clicking(id: NodeId, target: NodeId) -> ComponentNode {
        ComponentNode::new(id, "Button").with_prop(
            "onClick",
            ActionList::new().with_action(Action::component_method(target, "open")),
        )
    }

    #[test]
    fn test_clean_tree() {
        let tree = vec![ComponentNode::new(1, "Modal"), clicking(2, 1)];
        assert!(validate(&tree, &GeneratorOptions::default()).is_empty());
    }

    #[test]
    fn test_unresolved_target_is_error() {
        let tree = vec![clicking(2, 9)];
        let diagnostics = validate(&tree, &GeneratorOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(
            diagnostics[0].to_string(),
            "error on component 2: onClick targets component 9 which does not exist"
        );
    }

    #[test]
    fn test_nested_target_warns_unless_nested_refs() {
        let tree = vec![
            ComponentNode::new(1, "Page").with_child(ComponentNode::new(3, "Modal")),
            clicking(2, 3),
        ];
        let diagnostics = validate(&tree, &GeneratorOptions::default());
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::UndeclaredReference {
                event: "onClick".into(),
                target: 3
            }
        );
        assert_eq!(diagnostics[0].severity, Severity::Warning);

        let options = GeneratorOptions {
            nested_refs: true,
            ..Default::default()
        };
        assert!(validate(&tree, &options).is_empty());
    }

    #[test]
    fn test_state_names() {
        let tree = vec![
            ComponentNode::new(1, "Input").with_prop("value", "a"),
            ComponentNode::new(2, "Input")
                .with_prop("name", PropValue::number(1712345678))
                .with_prop("value", "b"),
            ComponentNode::new(3, "Input")
                .with_prop("name", "email")
                .with_prop("value", "c"),
        ];
        let kinds: Vec<DiagnosticKind> = validate(&tree, &GeneratorOptions::default())
            .into_iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::MissingStateName,
                DiagnosticKind::InvalidStateName {
                    name: "1712345678".into()
                },
            ]
        );
    }

    #[test]
    fn test_unsupported_actions_warn() {
        let actions = ActionList::new()
            .with_action(Action::show_message(MessageKind::Other("warn".into()), "a"))
            .with_action(Action::from_value(json!({
                "type": "componentMethod",
                "config": { "componentId": 1 }
            })));
        let tree = vec![
            ComponentNode::new(1, "Modal"),
            ComponentNode::new(4, "Button").with_prop("onClick", actions),
        ];
        let diagnostics = validate(&tree, &GeneratorOptions::default());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(
                Severity::Warning,
                4,
                DiagnosticKind::UnsupportedAction {
                    event: "onClick".into(),
                    index: 1
                },
            )]
        );
        assert_eq!(
            diagnostics[0].to_string(),
            "warning on component 4: onClick action 1 has an unsupported shape and is dropped"
        );
    }

    #[test]
    fn test_unsupported_event_value_warns() {
        let tree = vec![ComponentNode::new(2, "Button")
            .with_prop("onClick", PropValue::from(json!(true)))
            .with_prop("onHover", PropValue::bound("expression", "props.onHover"))];
        let kinds: Vec<DiagnosticKind> = validate(&tree, &GeneratorOptions::default())
            .into_iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::UnsupportedEventValue {
                event: "onClick".into()
            }]
        );
    }

    #[test]
    fn test_duplicate_id_warns() {
        let tree = vec![
            ComponentNode::new(1, "Page").with_child(ComponentNode::new(2, "Text")),
            ComponentNode::new(2, "Button"),
        ];
        let diagnostics = validate(&tree, &GeneratorOptions::default());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(Severity::Warning, 2, DiagnosticKind::DuplicateId)]
        );
        assert!(!diagnostics[0].is_error());
    }
}
