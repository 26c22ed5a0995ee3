//! Component tree model for the low-code editor.
//!
//! This crate provides the types shared by the editor and the code generator:
//! - [`ComponentNode`], the tree the user composes
//! - [`PropValue`] and [`Action`], the closed set of prop and event shapes
//! - tree traversal, lookup and JSON import
//! - [`ComponentStore`] and [`History`], editing with undo/redo

pub mod action;
pub mod errors;
pub mod history;
pub mod ident;
pub mod node;
pub mod props;
pub mod store;
pub mod tree;

pub use action::{Action, ActionList, MessageKind};
pub use errors::{ModelError, Result};
pub use history::{History, Snapshot};
pub use ident::is_identifier;
pub use node::{ComponentNode, NodeId, Props, Styles};
pub use props::{BoundValue, Literal, PropValue};
pub use store::ComponentStore;
pub use tree::{parse_components, walk};
