//! Options Resolver
//!
//! Static extraction of the component script's options object. A
//! recursive-descent reader over the expression lexer's tokens reduces the
//! trailing object-literal expression into a structured model without
//! executing any embedded code; free references become placeholder values.

pub mod ast;
pub mod parser;
pub mod resolver;

pub use ast::{ComponentOptions, ComputedDef, JsFunction, JsValue, PropsDecl, TypeCtor};
pub use resolver::resolve;
