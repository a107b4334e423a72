//! Options Resolver
//!
//! Cleans script boilerplate, extracts the trailing options expression, and
//! shapes the result into `ComponentOptions`. Irreducible scripts fail with
//! `EvalFailure`; everything else degrades to placeholders and review
//! notes.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{ComponentOptions, ComputedDef, JsFunction, JsValue, PropsDecl};
use super::parser::ScriptParser;
use crate::error::{CompilerError, Result};
use crate::util;

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*import[^;]+;+").unwrap());
static EXPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"export(\s+default)?\s+").unwrap());
static EVT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bevt\b").unwrap());

/// Strip import/export boilerplate and normalize the shorthand event
/// parameter spelling.
pub fn clean_component_script(source: &str) -> String {
    let cleaned = IMPORT_RE.replace_all(source, "");
    let cleaned = EXPORT_RE.replace(&cleaned, "");
    let cleaned = EVT_RE.replace_all(&cleaned, "event");
    cleaned.trim().to_string()
}

/// Resolve a script section into the structured options model.
pub fn resolve(script_source: &str) -> Result<ComponentOptions> {
    let cleaned = clean_component_script(script_source);
    if cleaned.is_empty() {
        return Ok(ComponentOptions::default());
    }

    let mut parser = ScriptParser::new(&cleaned).map_err(to_eval_failure)?;
    let object = parser.parse_options_expression().map_err(to_eval_failure)?;
    let mut review_notes = std::mem::take(&mut parser.review_notes);

    let mut options = ComponentOptions::default();

    for (key, value) in object {
        match key.as_str() {
            "props" => options.props = extract_props(value, &mut review_notes),
            "data" => options.data = extract_data(value, &mut review_notes)?,
            "computed" => options.computed = extract_computed(value, &mut review_notes),
            "methods" => options.methods = extract_methods(value, &mut review_notes),
            // The component's own name comes from its file path.
            "name" => {}
            other => {
                review_notes.push(format!("script section '{}' was not converted", other));
            }
        }
    }

    options.review_notes = review_notes;
    Ok(options)
}

fn to_eval_failure(error: CompilerError) -> CompilerError {
    match error {
        CompilerError::ParseError { message } => CompilerError::EvalFailure { message },
        other => other,
    }
}

fn extract_props(value: JsValue, review_notes: &mut Vec<String>) -> Option<PropsDecl> {
    match value {
        JsValue::Object(entries) => Some(PropsDecl::Named(entries)),
        JsValue::Array(items) => Some(PropsDecl::Listed(items)),
        other => {
            review_notes.push(format!(
                "props declaration was not a mapping or list: {}",
                other.to_js_source()
            ));
            None
        }
    }
}

fn extract_data(
    value: JsValue,
    review_notes: &mut Vec<String>,
) -> Result<IndexMap<String, JsValue>> {
    match value {
        JsValue::Object(entries) => Ok(entries),
        JsValue::Function(func) => {
            if !func.has_block_body {
                // Expression-bodied arrow thunk: `() => ({ … })`
                let mut parser = ScriptParser::new(&func.body).map_err(to_eval_failure)?;
                let object = parser.parse_options_expression().map_err(to_eval_failure)?;
                review_notes.extend(parser.review_notes);
                return Ok(object);
            }
            let mut parser = ScriptParser::new(&func.body).map_err(to_eval_failure)?;
            let object = parser.parse_thunk_return_object().map_err(to_eval_failure)?;
            review_notes.extend(parser.review_notes);
            Ok(object)
        }
        other => {
            review_notes.push(format!(
                "data section was not an object or thunk: {}",
                other.to_js_source()
            ));
            Ok(IndexMap::new())
        }
    }
}

fn extract_computed(
    value: JsValue,
    review_notes: &mut Vec<String>,
) -> IndexMap<String, ComputedDef> {
    let entries = match value {
        JsValue::Object(entries) => entries,
        other => {
            review_notes.push(format!(
                "computed section was not an object: {}",
                other.to_js_source()
            ));
            return IndexMap::new();
        }
    };

    let mut computed = IndexMap::new();
    for (name, entry) in entries {
        let def = match entry {
            JsValue::Function(func) => ComputedDef::Getter(func),
            JsValue::StubAccessor { origin, .. } => ComputedDef::Stub { origin },
            JsValue::Object(members) if members.contains_key("get") || members.contains_key("set") =>
            {
                let get = as_function(members.get("get"));
                let set = as_function(members.get("set"));
                ComputedDef::Accessor { get, set }
            }
            other => ComputedDef::Value(other),
        };
        computed.insert(name, def);
    }
    computed
}

fn as_function(value: Option<&JsValue>) -> Option<JsFunction> {
    match value {
        Some(JsValue::Function(func)) => Some(func.clone()),
        _ => None,
    }
}

fn extract_methods(
    value: JsValue,
    review_notes: &mut Vec<String>,
) -> IndexMap<String, JsFunction> {
    let entries = match value {
        JsValue::Object(entries) => entries,
        other => {
            review_notes.push(format!(
                "methods section was not an object: {}",
                other.to_js_source()
            ));
            return IndexMap::new();
        }
    };

    let mut methods = IndexMap::new();
    for (name, entry) in entries {
        match entry {
            JsValue::Function(func) => {
                methods.insert(name, func);
            }
            JsValue::StubAccessor { name: mapped, origin } => {
                // Stub body echoing the mapped name, flagged for follow-up.
                let body = format!(
                    "{{\n    // TODO: review: '{}' was mapped by {}\n    return {};\n  }}",
                    mapped,
                    origin,
                    util::quote_js_string(&mapped)
                );
                methods.insert(
                    name,
                    JsFunction {
                        params: String::new(),
                        body,
                        is_arrow: false,
                        has_block_body: true,
                    },
                );
            }
            other => {
                review_notes.push(format!(
                    "method '{}' was not a function: {}",
                    name,
                    other.to_js_source()
                ));
            }
        }
    }
    methods
}
