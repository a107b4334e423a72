#![deny(clippy::all)]

//! Vue SFC to React Compiler
//!
//! Converts Vue 2-style single-file components into React functional
//! components: a typed props interface, `useState` hooks, computed accessor
//! closures, event-bound methods, and a compiled JSX render tree.

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod chars;
pub mod codegen;
pub mod error;
pub mod expression_parser;
pub mod ml_parser;
pub mod parse_util;
pub mod scope;
pub mod script_parser;
pub mod sfc;
pub mod util;

pub use error::{CompilerError, Result};
pub use sfc::{parse_sfc, ParsedSfc};

/// Generator output profile. The default emits plain accessor closures;
/// the alternative emits a shared `computedState` object with
/// getter/setter pairs and the implicit-event-argument handler policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitProfile {
    #[default]
    Closures,
    ComputedState,
}

/// Compiler configuration
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    pub profile: EmitProfile,
    /// Append an implicit `event` argument to bare method references in
    /// event-handler position.
    pub implicit_event_arg: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            profile: EmitProfile::Closures,
            implicit_event_arg: false,
        }
    }
}

impl CompilerConfig {
    pub fn closures() -> Self {
        CompilerConfig::default()
    }

    pub fn computed_state() -> Self {
        CompilerConfig {
            profile: EmitProfile::ComputedState,
            implicit_event_arg: true,
        }
    }
}

/// A converted component: generated source plus the verbatim style block.
#[derive(Debug, Clone)]
pub struct ConvertedComponent {
    pub source: String,
    pub style: String,
    pub component_name: String,
    pub converted_name: String,
}

/// Convert already-split sections into the generated component source.
pub fn convert_sections(
    sections: &ParsedSfc,
    component_name: &str,
    config: &CompilerConfig,
) -> Result<String> {
    let options = script_parser::resolve(sections.script.as_deref().unwrap_or(""))?;
    let scope = scope::ScopeContext::from_options(component_name, &options);

    let props_interface = codegen::props::props_interface(component_name, options.props.as_ref())?;
    let methods = codegen::methods::method_decls(&scope, &options.methods, config);
    let computed = codegen::computed::computed_decls(&scope, &options.computed, config);
    let state = codegen::state::state_hooks(&options.data);

    let mut review_notes = options.review_notes.clone();

    let render = match &sections.template {
        Some(template) => {
            let parsed = ml_parser::Parser::new().parse(template);
            for error in &parsed.errors {
                review_notes.push(format!("template: {}", error));
            }
            codegen::jsx::JsxCompiler::new(&scope, config).generate_render(&parsed.root_nodes)
        }
        None => "  return null;".to_string(),
    };

    Ok(codegen::assembler::assemble(
        component_name,
        &props_interface,
        &methods,
        &computed,
        &state,
        &render,
        &review_notes,
    ))
}

/// Convert a full component source unit.
pub fn convert_source(
    source: &str,
    component_name: &str,
    config: &CompilerConfig,
) -> Result<ConvertedComponent> {
    let sections = parse_sfc(source);
    let component = convert_sections(&sections, component_name, config)?;

    Ok(ConvertedComponent {
        source: component,
        style: sections.style.unwrap_or_default(),
        component_name: component_name.to_string(),
        converted_name: util::to_hyphenated(component_name),
    })
}

/// Convert a component and return a JSON summary.
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn convert_component(source: String, name: String) -> napi::Result<String> {
    let result = match convert_source(&source, &name, &CompilerConfig::default()) {
        Ok(component) => serde_json::json!({
            "success": true,
            "name": component.component_name,
            "convertedName": component.converted_name,
            "source": component.source,
            "style": component.style,
        }),
        Err(error) => serde_json::json!({
            "success": false,
            "error": error.to_string(),
        }),
    };

    Ok(result.to_string())
}
