//! Identifier derivation for generated declarations.

use lowcode_core::NodeId;

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reference variable of a node: `<id>_ref`.
pub fn ref_name(id: NodeId) -> String {
    format!("{}_ref", id)
}

/// Handler of a node's event: `handle<Id><Event>`.
pub fn handler_name(id: NodeId, event: &str) -> String {
    format!("handle{}{}", capitalize(&id.to_string()), capitalize(event))
}

/// Setter paired with a state getter: `set<Name>`.
pub fn setter_name(getter: &str) -> String {
    format!("set{}", capitalize(getter))
}
