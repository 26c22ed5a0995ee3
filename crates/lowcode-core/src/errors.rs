//! Error types for the component model and editing store.

use crate::node::NodeId;
use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while importing or editing a component tree.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document is not valid JSON, or a node does not match the model.
    #[error("Invalid component data: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an array.
    #[error("Component data must be a JSON array of components, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Component {0} not found")]
    ComponentNotFound(NodeId),

    #[error("Parent component {0} not found")]
    ParentNotFound(NodeId),

    /// A node id is already in use somewhere in the tree.
    #[error("Component id {0} is already in use")]
    DuplicateId(NodeId),
}
