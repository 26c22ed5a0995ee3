//! React code generator with hooks pattern.

use super::templates::{to_pascal_case, TemplateEngine};
use super::CodeGenerator;
use crate::actions::Handler;
use crate::declarations::{ref_declarations, state_declarations, RefDeclaration, StateDeclaration};
use crate::error::{CodegenError, Result};
use crate::imports::ImportSet;
use crate::jsx::JsxEmitter;
use crate::options::{GeneratorOptions, DEFAULT_COMPONENT_NAME};
use crate::validate;
use lowcode_core::ComponentNode;
use serde::Serialize;

/// Indentation of root-level markup inside `return ( <> ... </> )`.
const MARKUP_INDENT: usize = 6;

/// Indentation of declarations inside the component body.
const BODY_INDENT: &str = "  ";

/// Module layout. Every injected section is empty or ends with a newline.
const MODULE_TEMPLATE: &str = "\
import React, { useState, useRef } from 'react';
import { message } from '{{library}}';
{{imports}}
const {{pascal_case component}} = () => {
{{declarations}}{{handlers}}  return (
    <>
{{markup}}    </>
  );
};

export default {{pascal_case component}};
";

#[derive(Serialize)]
struct ModuleData<'a> {
    library: &'a str,
    component: &'a str,
    imports: String,
    declarations: String,
    handlers: String,
    markup: String,
}

/// React code generator.
pub struct ReactGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl<'a> ReactGenerator<'a> {
    /// Create a new React generator with default options.
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create with explicit options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            engine: TemplateEngine::new(),
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the module for a root sequence.
    fn generate_module(&self, components: &[ComponentNode]) -> Result<String> {
        let _span = tracing::debug_span!("generate_react", roots = components.len()).entered();

        if self.options.strict {
            let diagnostics = validate::validate(components, &self.options);
            if diagnostics.iter().any(validate::Diagnostic::is_error) {
                return Err(CodegenError::Validation(diagnostics));
            }
        }

        let imports = ImportSet::collect(components);
        let states = state_declarations(components, &self.options);
        let refs = ref_declarations(components, &self.options);

        let mut emitter = JsxEmitter::new(&self.options);
        let markup = emitter.emit(components, MARKUP_INDENT);
        let handlers = emitter.into_handlers();

        let data = ModuleData {
            library: &self.options.library_module,
            component: self.component_name(),
            imports: terminated(&imports.render(&self.options), "\n"),
            declarations: self.declaration_section(&states, &refs),
            handlers: handler_section(&handlers),
            markup: terminated(&markup, "\n"),
        };
        let code = self.engine.render_string(MODULE_TEMPLATE, &data)?;

        tracing::debug!(
            imports = imports.len(),
            states = states.len(),
            refs = refs.len(),
            handlers = handlers.len(),
            bytes = code.len(),
            "generated react module"
        );
        Ok(code)
    }

    /// The configured component name, or the default when it has no
    /// identifier characters left after Pascal-casing.
    fn component_name(&self) -> &str {
        let name = self.options.component_name.as_str();
        if to_pascal_case(name).is_empty() {
            tracing::warn!(component = %name, "unusable component name; using the default");
            return DEFAULT_COMPONENT_NAME;
        }
        name
    }

    fn declaration_section(&self, states: &[StateDeclaration], refs: &[RefDeclaration]) -> String {
        let lines: Vec<String> = states
            .iter()
            .map(StateDeclaration::render)
            .chain(refs.iter().map(RefDeclaration::render))
            .map(|line| format!("{}{}", BODY_INDENT, line))
            .collect();
        terminated(&lines, "\n\n")
    }
}

/// Handlers separated by blank lines, followed by one blank line.
fn handler_section(handlers: &[Handler]) -> String {
    let blocks: Vec<String> = handlers.iter().map(Handler::render).collect();
    if blocks.is_empty() {
        return String::new();
    }
    format!("{}\n\n", blocks.join("\n\n"))
}

/// Join lines and append `end`; nothing at all for no lines.
fn terminated(lines: &[String], end: &str) -> String {
    if lines.is_empty() {
        return String::new();
    }
    format!("{}{}", lines.join("\n"), end)
}

impl<'a> Default for ReactGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CodeGenerator for ReactGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "React"
    }

    fn generate(&self, components: &[ComponentNode]) -> Result<String> {
        self.generate_module(components)
    }
}
