//! Computed Emission
//!
//! Two output profiles: accessor closures (`computeX` / `setComputeX`), or
//! a shared `computedState` object with getter/setter pairs.

use indexmap::IndexMap;

use crate::expression_parser::rewriter::{rewrite, RewriteOptions};
use crate::scope::ScopeContext;
use crate::script_parser::ast::{ComputedDef, JsFunction};
use crate::util;
use crate::{CompilerConfig, EmitProfile};

pub fn computed_decls(
    scope: &ScopeContext,
    computed: &IndexMap<String, ComputedDef>,
    config: &CompilerConfig,
) -> String {
    if computed.is_empty() {
        return String::new();
    }

    match config.profile {
        EmitProfile::Closures => closures_profile(scope, computed, config),
        EmitProfile::ComputedState => computed_state_profile(scope, computed, config),
    }
}

fn body_opts(config: &CompilerConfig) -> RewriteOptions<'static> {
    RewriteOptions {
        event_handler: false,
        implicit_event_arg: config.implicit_event_arg,
        profile: config.profile,
        shadowed: &[],
    }
}

fn rewrite_body(scope: &ScopeContext, func: &JsFunction, config: &CompilerConfig) -> String {
    let body = rewrite(scope, &func.body, &body_opts(config));
    if func.has_block_body {
        body
    } else {
        format!("{{ return {}; }}", body)
    }
}

fn closures_profile(
    scope: &ScopeContext,
    computed: &IndexMap<String, ComputedDef>,
    config: &CompilerConfig,
) -> String {
    let mut parts = Vec::new();

    for (name, def) in computed {
        match def {
            ComputedDef::Getter(func) => {
                parts.push(format!(
                    "  const {} = () => {};",
                    util::to_compute_name(name),
                    rewrite_body(scope, func, config)
                ));
            }
            ComputedDef::Accessor { get, set } => {
                if let Some(func) = get {
                    parts.push(format!(
                        "  const {} = () => {};",
                        util::to_compute_name(name),
                        rewrite_body(scope, func, config)
                    ));
                }
                if let Some(func) = set {
                    let params = if func.params.trim().is_empty() {
                        "value".to_string()
                    } else {
                        func.params.clone()
                    };
                    parts.push(format!(
                        "  const {} = ({}) => {};",
                        util::to_compute_setter_name(name),
                        params,
                        rewrite_body(scope, func, config)
                    ));
                }
            }
            ComputedDef::Value(value) => {
                parts.push(format!(
                    "  const {} = () => ({});",
                    util::to_compute_name(name),
                    value.to_js_source()
                ));
            }
            ComputedDef::Stub { origin } => {
                parts.push(format!(
                    "  const {} = () => {}; // TODO: review: '{}' was mapped by {}",
                    util::to_compute_name(name),
                    util::quote_js_string(name),
                    name,
                    origin
                ));
            }
        }
    }

    parts.join("\n\n")
}

fn computed_state_profile(
    scope: &ScopeContext,
    computed: &IndexMap<String, ComputedDef>,
    config: &CompilerConfig,
) -> String {
    let mut lines = vec!["  const computedState = {".to_string()];

    for (name, def) in computed {
        let target = util::convert_prop_or_state_name(name);
        match def {
            ComputedDef::Getter(func) => {
                lines.push(format!(
                    "    get {}() {},",
                    target,
                    rewrite_body(scope, func, config)
                ));
            }
            ComputedDef::Accessor { get, set } => {
                if let Some(func) = get {
                    lines.push(format!(
                        "    get {}() {},",
                        target,
                        rewrite_body(scope, func, config)
                    ));
                }
                if let Some(func) = set {
                    let params = if func.params.trim().is_empty() {
                        "value".to_string()
                    } else {
                        func.params.clone()
                    };
                    lines.push(format!(
                        "    set {}({}) {},",
                        target,
                        params,
                        rewrite_body(scope, func, config)
                    ));
                }
            }
            ComputedDef::Value(value) => {
                lines.push(format!(
                    "    get {}() {{ return {}; }},",
                    target,
                    value.to_js_source()
                ));
            }
            ComputedDef::Stub { origin } => {
                lines.push(format!(
                    "    get {}() {{ return {}; }}, // TODO: review: '{}' was mapped by {}",
                    target,
                    util::quote_js_string(name),
                    name,
                    origin
                ));
            }
        }
    }

    lines.push("  };".to_string());
    lines.join("\n")
}
