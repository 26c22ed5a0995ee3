//! Code generators for component trees.

mod react;
mod templates;

pub use react::ReactGenerator;
pub use templates::TemplateEngine;

use crate::error::Result;
use lowcode_core::ComponentNode;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Generate a module reproducing the given root sequence.
    fn generate(&self, components: &[ComponentNode]) -> Result<String>;

    /// Parse the editor's JSON document and generate from it.
    fn generate_json(&self, json: &str) -> Result<String> {
        let components = lowcode_core::parse_components(json)?;
        self.generate(&components)
    }
}
