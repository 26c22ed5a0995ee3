//! JSX markup emission.
//!
//! The emitter renders nodes into indented JSX lines and, as it meets event
//! props holding action lists, compiles their handlers. Handlers therefore
//! come out in the same pre-order as the markup.

use crate::actions::{self, Handler};
use crate::escape;
use crate::naming::ref_name;
use crate::options::GeneratorOptions;
use lowcode_core::{ComponentNode, Literal, PropValue, Styles};
use serde_json::{Map, Value};

/// Spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// Renders component trees into JSX and collects the handlers they reference.
pub struct JsxEmitter<'a> {
    options: &'a GeneratorOptions,
    handlers: Vec<Handler>,
}

impl<'a> JsxEmitter<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            handlers: Vec::new(),
        }
    }

    /// Render `components` as sibling lines starting at `indent` spaces.
    pub fn emit(&mut self, components: &[ComponentNode], indent: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for node in components {
            self.emit_node(node, indent, &mut lines);
        }
        lines
    }

    /// Handlers registered while emitting, in emission order.
    pub fn into_handlers(self) -> Vec<Handler> {
        self.handlers
    }

    fn emit_node(&mut self, node: &ComponentNode, indent: usize, out: &mut Vec<String>) {
        let spaces = " ".repeat(indent);
        let attributes = self.attributes(node).join(" ");

        if node.has_children() {
            out.push(format!("{}<{} {}>", spaces, node.name, attributes));
            for child in node.children() {
                self.emit_node(child, indent + INDENT_STEP, out);
            }
            out.push(format!("{}</{}>", spaces, node.name));
        } else {
            out.push(format!("{}<{} {} />", spaces, node.name, attributes));
        }
    }

    /// Attributes in prop order, then `style`, then `ref`.
    fn attributes(&mut self, node: &ComponentNode) -> Vec<String> {
        let mut attributes = Vec::with_capacity(node.props.len() + 2);

        for (key, value) in &node.props {
            match value {
                PropValue::Actions(list) if self.options.is_event(key) => {
                    let handler = actions::compile_list(node.id, key, list, self.options);
                    attributes.push(format!("{}={{{}}}", key, handler.name));
                    self.handlers.push(handler);
                }
                PropValue::Bound(bound) => {
                    attributes.push(format!("{}={{{}}}", key, bound.expression()));
                }
                PropValue::Literal(literal) => {
                    attributes.push(format!("{}=\"{}\"", key, self.literal_text(literal)));
                }
                PropValue::Actions(_) | PropValue::Unsupported(_) => {
                    tracing::debug!(node = node.id, prop = %key, "omitting prop with unsupported value");
                }
            }
        }

        if let Some(styles) = &node.styles {
            attributes.push(format!("style={{{}}}", style_literal(styles)));
        }

        attributes.push(format!("ref={{{}}}", ref_name(node.id)));
        attributes
    }

    fn literal_text(&self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) if self.options.escape_literals => escape::jsx_attribute(s).into_owned(),
            other => other.as_text(),
        }
    }
}

/// Serialize a style map as a compact object literal, keeping key order.
pub fn style_literal(styles: &Styles) -> String {
    let object: Map<String, Value> = styles
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Value::Object(object).to_string()
}
