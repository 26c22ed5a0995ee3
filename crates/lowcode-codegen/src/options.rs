//! Generator configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Component name used when none is configured.
pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";

/// Options for React code generation.
///
/// Deserializes from a partial JSON object; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Name of the generated component (Pascal-cased on output).
    pub component_name: String,
    /// Module the shared widgets and `message` are imported from.
    pub library_module: String,
    /// Component names imported from `library_module`.
    pub library_components: Vec<String>,
    /// Import path for every other component; `{name}` is replaced.
    pub local_import_path: String,
    /// Prop names starting with this prefix are events.
    pub event_prefix: String,
    /// Escape literal text injected into attributes and string literals.
    pub escape_literals: bool,
    /// Declare a ref for every node, not only root-level ones.
    pub nested_refs: bool,
    /// Fail generation when validation reports an error.
    pub strict: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            library_module: "antd".to_string(),
            library_components: ["Button", "Input", "Form", "Table", "Modal"]
                .into_iter()
                .map(String::from)
                .collect(),
            local_import_path: "./components/{name}/prod".to_string(),
            event_prefix: "on".to_string(),
            escape_literals: true,
            nested_refs: false,
            strict: false,
        }
    }
}

impl GeneratorOptions {
    /// Load options from JSON, filling in defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `name` comes from the shared widget library.
    pub fn is_library_component(&self, name: &str) -> bool {
        self.library_components.iter().any(|c| c == name)
    }

    /// Import path of a local component.
    pub fn local_path(&self, name: &str) -> String {
        self.local_import_path.replace("{name}", name)
    }

    /// Whether a prop key follows the event naming convention.
    pub fn is_event(&self, key: &str) -> bool {
        key.starts_with(self.event_prefix.as_str())
    }
}
