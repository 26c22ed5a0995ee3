//! Declarative event actions.
//!
//! An event prop holds an [`ActionList`]: an ordered list of instructions the
//! editor lets a user attach to an event. Each [`Action`] is compiled into one
//! imperative statement by the code generator.

use crate::ident::is_identifier;
use crate::node::NodeId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// Ordered list of actions bound to one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionList {
    pub actions: Vec<Action>,
}

impl ActionList {
    /// Create an empty action list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Decode the `actions` array of an event object.
    ///
    /// Entries that do not decode become [`Action::Unsupported`] rather than
    /// failing the whole list.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let actions = match object.remove("actions") {
            Some(Value::Array(items)) => items.into_iter().map(Action::from_value).collect(),
            _ => Vec::new(),
        };
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Ids of every node this list targets, in action order.
    pub fn targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.actions.iter().filter_map(Action::target)
    }

    /// Convert back to the editor's JSON shape.
    pub fn to_json(&self) -> Value {
        json!({ "actions": self.actions.iter().map(Action::to_json).collect::<Vec<_>>() })
    }
}

/// A single declarative instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Invoke a method exposed by another component.
    ComponentMethod { component_id: NodeId, method: String },
    /// Access a property or method on another component's native element.
    DomOperation { component_id: NodeId, operation: String },
    /// Show a transient notification.
    ShowMessage { kind: MessageKind, text: String },
    /// Anything the editor wrote that is not one of the known shapes.
    Unsupported(Value),
}

impl Action {
    pub fn component_method(component_id: NodeId, method: impl Into<String>) -> Self {
        Self::ComponentMethod {
            component_id,
            method: method.into(),
        }
    }

    pub fn dom_operation(component_id: NodeId, operation: impl Into<String>) -> Self {
        Self::DomOperation {
            component_id,
            operation: operation.into(),
        }
    }

    pub fn show_message(kind: MessageKind, text: impl Into<String>) -> Self {
        Self::ShowMessage {
            kind,
            text: text.into(),
        }
    }

    /// The node this action reaches into, if any.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::ComponentMethod { component_id, .. } | Self::DomOperation { component_id, .. } => {
                Some(*component_id)
            }
            Self::ShowMessage { .. } | Self::Unsupported(_) => None,
        }
    }

    /// Decode one action object, keeping unknown shapes as `Unsupported`.
    pub fn from_value(value: Value) -> Self {
        let decoded = match value.get("type").and_then(Value::as_str) {
            Some("componentMethod") => serde_json::from_value::<RawMethod>(value.clone())
                .ok()
                .map(|raw| Self::ComponentMethod {
                    component_id: raw.config.component_id,
                    method: raw.config.method,
                }),
            Some("domOperation") => serde_json::from_value::<RawDomOperation>(value.clone())
                .ok()
                .and_then(RawDomOperation::resolve),
            Some("showMessage") => serde_json::from_value::<RawMessage>(value.clone())
                .ok()
                .map(|raw| Self::ShowMessage {
                    kind: raw.config.kind,
                    text: raw.config.text,
                }),
            _ => None,
        };

        decoded.unwrap_or_else(|| {
            tracing::debug!(action = %value, "unrecognised action shape");
            Self::Unsupported(value)
        })
    }

    /// Convert back to the editor's JSON shape.
    pub fn to_json(&self) -> Value {
        match self {
            Self::ComponentMethod {
                component_id,
                method,
            } => json!({
                "type": "componentMethod",
                "config": { "componentId": component_id, "method": method },
            }),
            Self::DomOperation {
                component_id,
                operation,
            } => json!({
                "type": "domOperation",
                "targetComponentId": component_id,
                "operation": operation,
            }),
            Self::ShowMessage { kind, text } => json!({
                "type": "showMessage",
                "config": { "type": kind.as_str(), "text": text },
            }),
            Self::Unsupported(value) => value.clone(),
        }
    }
}

/// Notification flavour of a `showMessage` action.
///
/// The five kinds the editor offers have their own variants. Any other
/// identifier-shaped name is passed through as [`MessageKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
    Info,
    Warning,
    Loading,
    Other(String),
}

impl MessageKind {
    /// Parse a kind name. Returns `None` when it is not a valid identifier.
    pub fn parse(name: &str) -> Option<Self> {
        let kind = match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "loading" => Self::Loading,
            other if is_identifier(other) => Self::Other(other.to_string()),
            _ => return None,
        };
        Some(kind)
    }

    /// Name of the notification function.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Loading => "loading",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).ok_or_else(|| {
            de::Error::custom(format!("`{}` is not a valid message kind", name))
        })
    }
}

#[derive(Deserialize)]
struct RawMethod {
    config: RawMethodConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethodConfig {
    component_id: NodeId,
    method: String,
}

#[derive(Deserialize)]
struct RawMessage {
    config: RawMessageConfig,
}

#[derive(Deserialize)]
struct RawMessageConfig {
    #[serde(rename = "type")]
    kind: MessageKind,
    #[serde(default)]
    text: String,
}

/// The editor writes dom operations with top-level fields; a `config`
/// object in the same shape as `componentMethod` is accepted as well.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDomOperation {
    target_component_id: Option<NodeId>,
    operation: Option<String>,
    config: Option<RawDomConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDomConfig {
    component_id: Option<NodeId>,
    operation: Option<String>,
}

impl RawDomOperation {
    fn resolve(self) -> Option<Action> {
        let (config_id, config_op) = match self.config {
            Some(config) => (config.component_id, config.operation),
            None => (None, None),
        };
        Some(Action::DomOperation {
            component_id: self.target_component_id.or(config_id)?,
            operation: self.operation.or(config_op)?,
        })
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for ActionList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
