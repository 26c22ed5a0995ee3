//! React code generation from low-code editor component trees.
//!
//! The generator walks a root sequence of [`ComponentNode`]s and emits one
//! module reproducing the composed UI:
//!
//! - imports for every component type used, widgets grouped from the shared
//!   library and local components each from their own path
//! - `useState` pairs for root-level nodes carrying a `value` prop
//! - a `useRef` per root-level node
//! - one handler per event prop holding an action list
//! - the JSX markup, wrapped in a fragment
//!
//! Generation is pure: the same tree always yields the same string.
//!
//! # Example
//!
//! ```ignore
//! use lowcode_codegen::{CodeGenerator, ReactGenerator};
//!
//! let generator = ReactGenerator::new();
//! let code = generator.generate_json(&editor_json)?;
//! println!("{}", code);
//! ```

pub mod actions;
pub mod declarations;
pub mod error;
pub mod escape;
pub mod generators;
pub mod imports;
pub mod jsx;
pub mod naming;
pub mod options;
pub mod validate;

pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, ReactGenerator, TemplateEngine};
pub use options::GeneratorOptions;
pub use validate::{validate, Diagnostic, DiagnosticKind, Severity};

use lowcode_core::ComponentNode;

/// Generate React code with default options.
pub fn generate_react_code(components: &[ComponentNode]) -> Result<String> {
    ReactGenerator::new().generate(components)
}
