//! Options Model
//!
//! The decoded, structured form of a component's script section.

use indexmap::IndexMap;

use crate::util;

/// A statically-extracted JavaScript value from the options object.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    /// BigInt literal, digits kept as written (without the `n` suffix).
    BigInt(String),
    Str(String),
    Array(Vec<JsValue>),
    Object(IndexMap<String, JsValue>),
    Function(JsFunction),
    /// A type constructor reference (`String`, `Number`, …).
    TypeRef(TypeCtor),
    /// A free reference the extractor could not resolve. Rendered as a
    /// string echoing the referenced name.
    ExternalRef(String),
    /// An entry produced by a recognized store-mapping helper spread;
    /// emitted as a stub accessor needing manual follow-up.
    StubAccessor { name: String, origin: String },
}

/// A function value captured as source text. `body` keeps the enclosing
/// braces for block bodies; expression-bodied arrows store the bare
/// expression with `has_block_body == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsFunction {
    pub params: String,
    pub body: String,
    pub is_arrow: bool,
    pub has_block_body: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCtor {
    String,
    Number,
    Boolean,
    BigInt,
    Object,
    Array,
}

impl TypeCtor {
    pub fn from_name(name: &str) -> Option<TypeCtor> {
        match name {
            "String" => Some(TypeCtor::String),
            "Number" => Some(TypeCtor::Number),
            "Boolean" => Some(TypeCtor::Boolean),
            "BigInt" => Some(TypeCtor::BigInt),
            "Object" => Some(TypeCtor::Object),
            "Array" => Some(TypeCtor::Array),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TypeCtor::String => "String",
            TypeCtor::Number => "Number",
            TypeCtor::Boolean => "Boolean",
            TypeCtor::BigInt => "BigInt",
            TypeCtor::Object => "Object",
            TypeCtor::Array => "Array",
        }
    }
}

impl JsValue {
    /// Render the value back to JavaScript source text.
    pub fn to_js_source(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Bool(value) => value.to_string(),
            JsValue::Number(value) => util::format_js_number(*value),
            JsValue::BigInt(digits) => format!("BigInt({})", digits),
            JsValue::Str(value) => util::quote_js_string(value),
            JsValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_js_source()).collect();
                format!("[ {} ]", parts.join(", "))
            }
            JsValue::Object(entries) => {
                if entries.is_empty() {
                    return "{}".to_string();
                }
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", util::quote_js_string(key), value.to_js_source())
                    })
                    .collect();
                format!("{{ {} }}", parts.join(", "))
            }
            JsValue::Function(func) => {
                let body = if func.has_block_body {
                    func.body.clone()
                } else {
                    format!("{{ return {}; }}", func.body)
                };
                if func.is_arrow {
                    format!("({}) => {}", func.params, body)
                } else {
                    format!("function({}) {}", func.params, body)
                }
            }
            JsValue::TypeRef(ctor) => ctor.name().to_string(),
            JsValue::ExternalRef(name) => util::quote_js_string(name),
            JsValue::StubAccessor { name, .. } => util::quote_js_string(name),
        }
    }
}

/// Props declaration: a name→descriptor mapping, or the unkeyed
/// array-style list whose prop names are unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum PropsDecl {
    Named(IndexMap<String, JsValue>),
    Listed(Vec<JsValue>),
}

/// A computed entry: plain value, getter, getter/setter pair, or a stub
/// produced by a store-mapping helper.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputedDef {
    Value(JsValue),
    Getter(JsFunction),
    Accessor {
        get: Option<JsFunction>,
        set: Option<JsFunction>,
    },
    Stub {
        origin: String,
    },
}

impl ComputedDef {
    pub fn has_setter(&self) -> bool {
        matches!(self, ComputedDef::Accessor { set: Some(_), .. })
    }
}

/// The decoded script object. All sections optional; absence means empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentOptions {
    pub props: Option<PropsDecl>,
    pub data: IndexMap<String, JsValue>,
    pub computed: IndexMap<String, ComputedDef>,
    pub methods: IndexMap<String, JsFunction>,
    /// Irregularities that degrade to review markers in generated output.
    pub review_notes: Vec<String>,
}
