//! Method Emission
//!
//! Methods become arrow-function closures with their bodies run through the
//! expression rewriter.

use indexmap::IndexMap;

use crate::expression_parser::rewriter::{rewrite, RewriteOptions};
use crate::scope::ScopeContext;
use crate::script_parser::ast::JsFunction;
use crate::util;
use crate::CompilerConfig;

pub fn method_decls(
    scope: &ScopeContext,
    methods: &IndexMap<String, JsFunction>,
    config: &CompilerConfig,
) -> String {
    if methods.is_empty() {
        return String::new();
    }

    let opts = RewriteOptions {
        event_handler: false,
        implicit_event_arg: config.implicit_event_arg,
        profile: config.profile,
        shadowed: &[],
    };

    let mut parts = Vec::with_capacity(methods.len());
    for (name, func) in methods {
        let body = rewrite(scope, &func.body, &opts);
        let body = if func.has_block_body {
            body
        } else {
            format!("{{ return {}; }}", body)
        };
        parts.push(format!(
            "  const {} = ({}) => {};",
            util::to_method_name(name),
            func.params,
            body
        ));
    }

    parts.join("\n\n")
}
