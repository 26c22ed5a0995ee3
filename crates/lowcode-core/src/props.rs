//! Component prop values.

use crate::action::ActionList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Number, Value};
use std::fmt;

/// A plain scalar prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(Number),
}

impl Literal {
    /// Text of the literal as it appears in an attribute.
    pub fn as_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A prop value tagged to be rendered as a live expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    /// The binding tag (`expression`, `variable`, ...).
    pub kind: String,
    /// The bound expression.
    pub value: Value,
}

impl BoundValue {
    /// The expression text, inserted verbatim by the code generator.
    pub fn expression(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Every shape a prop value can take.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Literal(Literal),
    Bound(BoundValue),
    Actions(ActionList),
    /// Booleans, null, arrays and objects that are neither bindings nor
    /// action lists.
    Unsupported(Value),
}

impl PropValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Self::Literal(Literal::Number(value.into()))
    }

    pub fn bound(kind: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::Bound(BoundValue {
            kind: kind.into(),
            value: Value::String(expression.into()),
        })
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_actions(&self) -> Option<&ActionList> {
        match self {
            Self::Actions(actions) => Some(actions),
            _ => None,
        }
    }

    /// Convert back to the editor's JSON shape.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Literal(Literal::String(s)) => Value::String(s.clone()),
            Self::Literal(Literal::Number(n)) => Value::Number(n.clone()),
            Self::Bound(bound) => json!({ "type": bound.kind, "value": bound.value }),
            Self::Actions(actions) => actions.to_json(),
            Self::Unsupported(value) => value.clone(),
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Literal(Literal::String(s)),
            Value::Number(n) => Self::Literal(Literal::Number(n)),
            Value::Object(object) => {
                if matches!(object.get("actions"), Some(Value::Array(_))) {
                    return Self::Actions(ActionList::from_object(object));
                }
                match (object.get("type"), object.get("value")) {
                    (Some(kind), Some(value)) => Self::Bound(BoundValue {
                        kind: kind.as_str().map_or_else(|| kind.to_string(), str::to_string),
                        value: value.clone(),
                    }),
                    _ => Self::Unsupported(Value::Object(object)),
                }
            }
            other => Self::Unsupported(other),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<ActionList> for PropValue {
    fn from(value: ActionList) -> Self {
        Self::Actions(value)
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_scalars_are_literals() {
        assert_eq!(PropValue::from(json!("Hi")), PropValue::string("Hi"));
        assert_eq!(PropValue::from(json!(12)), PropValue::number(12));
    }

    #[test]
    fn test_tagged_object_is_bound() {
        let value = PropValue::from(json!({ "type": "expression", "value": "count" }));
        match value {
            PropValue::Bound(bound) => {
                assert_eq!(bound.kind, "expression");
                assert_eq!(bound.expression(), "count");
            }
            other => panic!("expected bound value, got {:?}", other),
        }
    }

    #[test]
    fn test_bound_number_expression() {
        let value = PropValue::from(json!({ "type": "expression", "value": 3 }));
        let bound = match value {
            PropValue::Bound(bound) => bound,
            other => panic!("expected bound value, got {:?}", other),
        };
        assert_eq!(bound.expression(), "3");
    }

    #[test]
    fn test_actions_win_over_binding() {
        let value = PropValue::from(json!({
            "type": "event",
            "value": "ignored",
            "actions": [{ "type": "componentMethod", "config": { "componentId": 1, "method": "open" } }]
        }));
        let actions = value.as_actions().expect("action list");
        assert_eq!(actions.actions, vec![Action::component_method(1, "open")]);
    }

    #[test]
    fn test_other_shapes_unsupported() {
        for value in [json!(true), json!(null), json!([1, 2]), json!({ "a": 1 })] {
            assert!(matches!(PropValue::from(value), PropValue::Unsupported(_)));
        }
    }
}
