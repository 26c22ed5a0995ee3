//! Error types for code generation.

use crate::validate::{Diagnostic, Severity};
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Strict mode found errors in the component tree.
    #[error("Component tree failed validation: {}", summarize(.0))]
    Validation(Vec<Diagnostic>),

    /// The component tree could not be imported.
    #[error(transparent)]
    Model(#[from] lowcode_core::ModelError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
