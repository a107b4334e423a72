//! Props Interface Emission
//!
//! Renders the component's props declaration as a TypeScript interface.
//! Field order follows declaration order. Unmappable primitive type values
//! are fatal (`UnsupportedType`); descriptor objects without a recognizable
//! type marker degrade to a review-flagged `any`.

use indexmap::IndexMap;

use crate::error::{CompilerError, Result};
use crate::script_parser::ast::{JsValue, PropsDecl, TypeCtor};
use crate::util;

/// Emit the full interface declaration for a component.
pub fn props_interface(component_name: &str, props: Option<&PropsDecl>) -> Result<String> {
    let interface_name = format!("{}Props", component_name);

    match props {
        None => Ok(format!("export interface {} {{}}", interface_name)),
        // Array-style declarations carry no prop names.
        Some(PropsDecl::Listed(_)) => Ok(format!("export interface {} {{}}", interface_name)),
        Some(PropsDecl::Named(entries)) => {
            let body = named_props_to_ts(entries, 1)?;
            Ok(format!(
                "export interface {} {{{}}};",
                interface_name, body
            ))
        }
    }
}

fn named_props_to_ts(entries: &IndexMap<String, JsValue>, depth: usize) -> Result<String> {
    let prefix = util::indent_for_depth(depth);
    let mut out = String::from("\n");

    for (prop_name, value) in entries {
        let field = util::to_prop_name(prop_name);
        match value {
            JsValue::Object(members) if !members.contains_key("type") => {
                if members.values().all(is_descriptor) && !members.is_empty() {
                    let nested = named_props_to_ts(members, depth + 1)?;
                    out.push_str(&format!("{}{}: {{{}{}}};\n", prefix, field, nested, prefix));
                } else {
                    out.push_str(&format!(
                        "{}{}: any; // TODO: review untyped prop declaration\n",
                        prefix, field
                    ));
                }
            }
            JsValue::ExternalRef(_) | JsValue::Function(_) => {
                out.push_str(&format!(
                    "{}{}: any; // TODO: review untyped prop declaration\n",
                    prefix, field
                ));
            }
            other => {
                let annotation = type_annotation(other, depth)?;
                out.push_str(&format!("{}{}: {};\n", prefix, field, annotation));
            }
        }
    }

    Ok(out)
}

fn is_descriptor(value: &JsValue) -> bool {
    matches!(
        value,
        JsValue::TypeRef(_) | JsValue::Array(_) | JsValue::Object(_)
    )
}

/// Map a type descriptor value to its annotation.
fn type_annotation(value: &JsValue, depth: usize) -> Result<String> {
    match value {
        JsValue::TypeRef(ctor) => Ok(vue_type_to_ts(*ctor).to_string()),
        // Array-shorthand: a one-of union of the listed types.
        JsValue::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(type_annotation(item, depth)?);
            }
            Ok(parts.join(" | "))
        }
        JsValue::Object(members) => {
            if let Some(inner) = members.get("type") {
                return type_annotation(inner, depth);
            }
            let nested = named_props_to_ts(members, depth + 1)?;
            Ok(format!("{{{}{}}}", nested, util::indent_for_depth(depth)))
        }
        other => Err(CompilerError::UnsupportedType {
            value: other.to_js_source(),
        }),
    }
}

fn vue_type_to_ts(ctor: TypeCtor) -> &'static str {
    match ctor {
        TypeCtor::String => "string",
        TypeCtor::Number => "number",
        TypeCtor::Boolean => "boolean",
        TypeCtor::BigInt => "bigint",
        TypeCtor::Object => "any",
        TypeCtor::Array => "Array<any>",
    }
}
