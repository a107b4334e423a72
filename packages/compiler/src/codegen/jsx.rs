//! Markup-to-JSX Compiler
//!
//! Depth-first emission over the template node tree. Conditional directive
//! runs lower into immediately-invoked closures with chained branches,
//! iteration directives into `.map()` calls, text interpolation into brace
//! expressions. Sibling sequencing goes through `RenderFragment`s.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::context::EmitContext;
use super::events::react_event_name;
use crate::expression_parser::rewriter::{rewrite, RewriteOptions};
use crate::ml_parser::ast::{Element, Node};
use crate::scope::ScopeContext;
use crate::util;
use crate::CompilerConfig;

/// Attribute blocks wider than this reflow one attribute per line.
const ATTR_WIDTH_LIMIT: usize = 100;

static INTERPOLATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").unwrap());
static ITERATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\(?\s*([A-Za-z_$][\w$]*)\s*(?:,\s*([A-Za-z_$][\w$]*)\s*)?\)?\s+(?:in|of)\s+(.+)$")
        .unwrap()
});

/// Structural directives interpreted by this compiler rather than emitted
/// as attributes.
const STRUCTURAL_ATTRS: &[&str] = &["v-if", "v-else-if", "v-else", "v-show", "v-for", "v-text"];

/// Intermediate compiled JSX text plus sequencing metadata.
struct RenderFragment {
    text: String,
    multiline: bool,
    closes_conditional: bool,
    is_element: bool,
}

impl RenderFragment {
    fn text_only(text: String) -> Self {
        RenderFragment {
            multiline: text.trim_end().contains('\n'),
            text,
            closes_conditional: false,
            is_element: false,
        }
    }

    fn element(text: String) -> Self {
        RenderFragment {
            multiline: text.trim_end().contains('\n'),
            text,
            closes_conditional: false,
            is_element: true,
        }
    }

    fn closure(text: String) -> Self {
        RenderFragment {
            multiline: true,
            text,
            closes_conditional: true,
            is_element: true,
        }
    }
}

/// One open conditional run: chained branches accumulated until a
/// non-conditional sibling closes the closure.
struct CondRun {
    branches: Vec<CondBranch>,
    has_else: bool,
}

struct CondBranch {
    condition: Option<String>,
    body: String,
}

/// One attribute group's contribution.
enum AttrValue {
    Exprs(Vec<String>),
    Spread(String),
}

pub struct JsxCompiler<'a> {
    scope: &'a ScopeContext,
    config: &'a CompilerConfig,
}

impl<'a> JsxCompiler<'a> {
    pub fn new(scope: &'a ScopeContext, config: &'a CompilerConfig) -> Self {
        JsxCompiler { scope, config }
    }

    /// Compile the parsed template into the component's return statement.
    pub fn generate_render(&self, roots: &[Node]) -> String {
        if roots.is_empty() {
            return "  return null;".to_string();
        }

        let jsx = self.emit_nodes(roots, &EmitContext::root());
        if jsx.trim().is_empty() {
            return "  return null;".to_string();
        }

        format!("  return (\n{}  );", jsx)
    }

    fn rewrite_expr(&self, text: &str, ctx: &EmitContext) -> String {
        let opts = RewriteOptions {
            event_handler: false,
            implicit_event_arg: self.config.implicit_event_arg,
            profile: self.config.profile,
            shadowed: &ctx.shadowed,
        };
        rewrite(self.scope, text, &opts)
    }

    fn rewrite_event(&self, text: &str, ctx: &EmitContext) -> String {
        let opts = RewriteOptions {
            event_handler: true,
            implicit_event_arg: self.config.implicit_event_arg,
            profile: self.config.profile,
            shadowed: &ctx.shadowed,
        };
        rewrite(self.scope, text, &opts)
    }

    /// Walk a sibling list, tracking the conditional-run state machine, and
    /// sequence the resulting fragments.
    fn emit_nodes(&self, nodes: &[Node], ctx: &EmitContext) -> String {
        let mut fragments: Vec<RenderFragment> = Vec::new();
        let mut run: Option<CondRun> = None;

        for node in nodes {
            match node {
                Node::Comment(_) => {}
                Node::Text(text) => {
                    if !ctx.inside_jsx {
                        continue;
                    }
                    let trimmed = text.value.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.close_run(&mut run, &mut fragments, ctx);
                    let rewritten = self.interpolate(trimmed, ctx);
                    fragments.push(RenderFragment::text_only(format!(
                        "{}{}\n",
                        ctx.indent(1),
                        rewritten
                    )));
                }
                Node::Element(el) => self.emit_element_in_walk(el, ctx, &mut run, &mut fragments),
            }
        }
        self.close_run(&mut run, &mut fragments, ctx);
        sequence_fragments(fragments)
    }

    fn emit_element_in_walk(
        &self,
        el: &Element,
        ctx: &EmitContext,
        run: &mut Option<CondRun>,
        fragments: &mut Vec<RenderFragment>,
    ) {
        // The template container is transparent.
        if el.name == "template" {
            self.close_run(run, fragments, ctx);
            let text = self.emit_nodes(&el.children, &ctx.template_child());
            if !text.is_empty() {
                fragments.push(RenderFragment::text_only(text));
            }
            return;
        }

        // Iteration is compiled standalone; structural directives on the
        // node are disabled for its own re-compilation.
        if el.has_attr("v-for") {
            self.close_run(run, fragments, ctx);
            fragments.push(self.emit_iteration(el, ctx));
            return;
        }

        if let Some(attr) = el.attr("v-if") {
            // Entering a run from normal state closes any open closure
            // first; two back-to-back runs stay two closures.
            self.close_run(run, fragments, ctx);
            *run = Some(CondRun {
                branches: vec![CondBranch {
                    condition: Some(self.rewrite_expr(&attr.value, ctx)),
                    body: self.compile_branch_element(el, ctx),
                }],
                has_else: false,
            });
            return;
        }

        if let Some(attr) = el.attr("v-else-if") {
            let condition = Some(self.rewrite_expr(&attr.value, ctx));
            let body = self.compile_branch_element(el, ctx);
            match run.as_mut() {
                Some(open) if !open.has_else => {
                    open.branches.push(CondBranch { condition, body });
                }
                _ => {
                    // Stray else-if opens a fresh run as a plain if.
                    self.close_run(run, fragments, ctx);
                    *run = Some(CondRun {
                        branches: vec![CondBranch { condition, body }],
                        has_else: false,
                    });
                }
            }
            return;
        }

        if el.has_attr("v-else") {
            match run.as_mut() {
                Some(open) if !open.has_else => {
                    open.branches.push(CondBranch {
                        condition: None,
                        body: self.compile_branch_element(el, ctx),
                    });
                    open.has_else = true;
                }
                _ => {
                    // Stray else degrades to unconditional output with a
                    // review marker.
                    self.close_run(run, fragments, ctx);
                    fragments.push(RenderFragment::text_only(format!(
                        "{}{{/* TODO: review: v-else without a preceding v-if */}}\n",
                        ctx.indent(1)
                    )));
                    fragments.push(RenderFragment::element(self.element_to_jsx(el, ctx)));
                }
            }
            return;
        }

        if let Some(attr) = el.attr("v-show") {
            // Lowered like a single-branch if; never chains.
            self.close_run(run, fragments, ctx);
            let show_run = CondRun {
                branches: vec![CondBranch {
                    condition: Some(self.rewrite_expr(&attr.value, ctx)),
                    body: self.compile_branch_element(el, ctx),
                }],
                has_else: false,
            };
            fragments.push(RenderFragment::closure(self.run_to_closure(&show_run, ctx)));
            return;
        }

        self.close_run(run, fragments, ctx);
        fragments.push(RenderFragment::element(self.element_to_jsx(el, ctx)));
    }

    fn close_run(
        &self,
        run: &mut Option<CondRun>,
        fragments: &mut Vec<RenderFragment>,
        ctx: &EmitContext,
    ) {
        if let Some(open) = run.take() {
            fragments.push(RenderFragment::closure(self.run_to_closure(&open, ctx)));
        }
    }

    /// A branch's element, compiled for use inside the closure body
    /// (three levels in: closure, branch, return-parenthesis).
    fn compile_branch_element(&self, el: &Element, ctx: &EmitContext) -> String {
        self.element_to_jsx(el, &ctx.deeper(3))
    }

    fn run_to_closure(&self, run: &CondRun, ctx: &EmitContext) -> String {
        let p = ctx.indent(1);
        // As a JSX child the closure needs an expression container; as the
        // root render expression it stands on its own.
        let (open, close) = if ctx.template_root { ("", "") } else { ("{", "}") };
        let mut text = format!("{}{}(() => {{\n", p, open);

        for (i, branch) in run.branches.iter().enumerate() {
            match (&branch.condition, i) {
                (Some(condition), 0) => {
                    text.push_str(&format!("{}  if ({}) {{\n", p, condition));
                }
                (Some(condition), _) => {
                    text.push_str(&format!("{}  }} else if ({}) {{\n", p, condition));
                }
                (None, _) => {
                    text.push_str(&format!("{}  }} else {{\n", p));
                }
            }
            text.push_str(&format!("{}    return (\n", p));
            text.push_str(&branch.body);
            text.push_str(&format!("{}    );\n", p));
        }

        text.push_str(&format!("{}  }}\n", p));
        if !run.has_else {
            text.push_str(&format!("{}  return null;\n", p));
        }
        text.push_str(&format!("{}}})(){}\n", p, close));
        text
    }

    fn emit_iteration(&self, el: &Element, ctx: &EmitContext) -> RenderFragment {
        let attr = el.attr("v-for").unwrap();
        let (item, index, source) = parse_iteration(&attr.value);

        // A purely numeric source lowers into an explicit literal sequence.
        let source_expr = match source.parse::<usize>() {
            Ok(count) => {
                let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
                format!("[{}]", items.join(", "))
            }
            Err(_) => self.rewrite_expr(&source, ctx),
        };

        let mut inner_ctx = ctx.deeper(2);
        inner_ctx.shadowed.push(item.clone());
        inner_ctx.shadowed.push(index.clone());

        let p = ctx.indent(1);
        let (open, close) = if ctx.template_root { ("", "") } else { ("{", "}") };
        let mut text = format!(
            "{}{}{}.map(({}, {}) => {{\n",
            p, open, source_expr, item, index
        );
        if el.has_attr("v-if") || el.has_attr("v-show") {
            text.push_str(&format!(
                "{}  // TODO: review: conditional directive on the iterated element was not converted\n",
                p
            ));
        }
        text.push_str(&format!("{}  return (\n", p));
        text.push_str(&self.element_to_jsx(el, &inner_ctx));
        text.push_str(&format!("{}  );\n", p));
        text.push_str(&format!("{}}}){}\n", p, close));

        RenderFragment::closure(text)
    }

    /// Compile one element into its JSX text (structural directives are
    /// handled by the callers and never re-enter here).
    fn element_to_jsx(&self, el: &Element, ctx: &EmitContext) -> String {
        let prefix = ctx.indent(1);
        let (attrs_str, attrs_multiline) = self.attributes_to_jsx(el, ctx);

        let children_str = if let Some(vtext) = el.attr("v-text") {
            // Text binding replaces the children entirely.
            let value = self.rewrite_expr(&vtext.value, ctx);
            format!("{}{{{}}}\n", ctx.indent(2), value)
        } else {
            self.emit_nodes(&el.children, &ctx.child())
        };

        let mut out = format!("{}<{}", prefix, el.name);
        if !attrs_str.is_empty() && !attrs_multiline {
            out.push(' ');
            out.push_str(&attrs_str);
        } else if attrs_multiline {
            out.push_str(&attrs_str);
        }

        if !children_str.trim().is_empty() {
            if attrs_multiline {
                out.push_str(&format!("\n{}>\n", prefix));
            } else {
                out.push_str(">\n");
            }
            out.push_str(&children_str);
            out.push_str(&format!("{}</{}>\n", prefix, el.name));
        } else if attrs_multiline {
            out.push_str(&format!("\n{}/>\n", prefix));
        } else {
            out.push_str("/>\n");
        }

        out
    }

    /// Translate, group, and render an element's attributes. Returns the
    /// rendered block and whether it reflowed across lines.
    fn attributes_to_jsx(&self, el: &Element, ctx: &EmitContext) -> (String, bool) {
        if el.attrs.is_empty() {
            return (String::new(), false);
        }

        let mut grouped: IndexMap<String, AttrValue> = IndexMap::new();
        let mut spread_count = 0usize;

        for attr in &el.attrs {
            let name = attr.name.as_str();

            if STRUCTURAL_ATTRS.contains(&name) {
                continue;
            }

            if name == "v-model" {
                self.push_model_binding(el, &attr.value, ctx, &mut grouped);
                continue;
            }

            if let Some(rest) = name.strip_prefix("v-bind:") {
                let value = self.rewrite_expr(&attr.value, ctx);
                if value.trim().is_empty() {
                    continue;
                }
                push_value(&mut grouped, convert_attribute_name(rest), value);
            } else if name == "v-bind" {
                let value = self.rewrite_expr(&attr.value, ctx);
                if value.trim().is_empty() {
                    continue;
                }
                spread_count += 1;
                grouped.insert(format!("...{}", spread_count), AttrValue::Spread(value));
            } else if let Some(rest) = name.strip_prefix(':') {
                let value = self.rewrite_expr(&attr.value, ctx);
                if value.trim().is_empty() {
                    continue;
                }
                push_value(&mut grouped, convert_attribute_name(rest), value);
            } else if let Some(rest) = name.strip_prefix('@').or_else(|| name.strip_prefix("v-on:"))
            {
                // Modifiers are dropped; only the base event name maps.
                let base = rest.split('.').next().unwrap_or(rest);
                let value = self.rewrite_event(&attr.value, ctx);
                if value.trim().is_empty() {
                    continue;
                }
                push_value(
                    &mut grouped,
                    react_event_name(base),
                    format!("(event) => {{ {} }}", value),
                );
            } else {
                push_value(
                    &mut grouped,
                    convert_attribute_name(name),
                    util::quote_js_string(&attr.value),
                );
            }
        }

        let mut parts: Vec<String> = Vec::new();
        for (name, contribution) in &grouped {
            match contribution {
                AttrValue::Spread(expr) => parts.push(format!("{{...{}}}", expr)),
                AttrValue::Exprs(values) => {
                    let value = if name == "className" {
                        let mut sources: Vec<&String> = Vec::new();
                        for candidate in values {
                            if ctx.template_root && sources.contains(&candidate) {
                                continue;
                            }
                            sources.push(candidate);
                        }
                        if sources.len() > 1 {
                            let joined: Vec<String> =
                                sources.iter().map(|s| s.to_string()).collect();
                            format!("classNames({})", joined.join(", "))
                        } else {
                            sources[0].clone()
                        }
                    } else {
                        values.join(", ")
                    };

                    if value.is_empty() {
                        continue;
                    }
                    if value.starts_with('\'') || value.starts_with('"') {
                        parts.push(format!("{}={}", name, value));
                    } else {
                        parts.push(format!("{}={{{}}}", name, value));
                    }
                }
            }
        }

        if parts.is_empty() {
            return (String::new(), false);
        }

        let total: usize = parts.iter().map(|p| p.len()).sum();
        if total > ATTR_WIDTH_LIMIT {
            let attr_prefix = ctx.indent(2);
            let mut lines = vec![String::new()];
            lines.extend(parts.iter().map(|p| format!("{}{}", attr_prefix, p)));
            (lines.join("\n"), true)
        } else {
            (parts.join(" "), false)
        }
    }

    /// Two-way binding: a value read plus a setter-shaped change handler.
    /// Custom elements carry a review marker instead of a guessed
    /// propagation contract.
    fn push_model_binding(
        &self,
        el: &Element,
        target: &str,
        ctx: &EmitContext,
        grouped: &mut IndexMap<String, AttrValue>,
    ) {
        let read = self.rewrite_expr(target, ctx);
        if read.trim().is_empty() {
            return;
        }
        push_value(grouped, "value".to_string(), read);

        if is_form_control(&el.name) {
            let assignment = format!("{} = event.target.value", target);
            let handler = self.rewrite_expr(&assignment, ctx);
            push_value(
                grouped,
                "onChange".to_string(),
                format!("(event) => {{ {} }}", handler),
            );
        } else {
            let assignment = format!("{} = value", target);
            let handler = self.rewrite_expr(&assignment, ctx);
            push_value(
                grouped,
                "onChange".to_string(),
                format!(
                    "(value) => {{ {} /* TODO: review: two-way binding on a custom element */ }}",
                    handler
                ),
            );
        }
    }

    /// Convert `{{ expr }}` spans in a text node into brace expressions.
    fn interpolate(&self, text: &str, ctx: &EmitContext) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0usize;

        for caps in INTERPOLATION_RE.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let inner = caps.get(1).unwrap().as_str().trim();
            out.push_str(&text[last..whole.start()]);
            out.push_str(&format!("{{{}}}", self.rewrite_expr(inner, ctx)));
            last = whole.end();
        }
        out.push_str(&text[last..]);

        out
    }
}

/// Append a value to an attribute group, creating the group on first use.
fn push_value(grouped: &mut IndexMap<String, AttrValue>, name: String, value: String) {
    match grouped.entry(name) {
        indexmap::map::Entry::Occupied(mut entry) => {
            if let AttrValue::Exprs(values) = entry.get_mut() {
                values.push(value);
            }
        }
        indexmap::map::Entry::Vacant(entry) => {
            entry.insert(AttrValue::Exprs(vec![value]));
        }
    }
}

/// Join sibling fragments. Adjacent multi-line element renderings are
/// separated by a blank line; back-to-back conditional closures read as
/// one run and stay tight.
fn sequence_fragments(fragments: Vec<RenderFragment>) -> String {
    let mut out = String::new();
    let mut previous: Option<RenderFragment> = None;

    for fragment in fragments {
        if let Some(prev) = &previous {
            let both_elements = prev.is_element && fragment.is_element;
            let chained_closures = prev.closes_conditional && fragment.closes_conditional;
            if both_elements && !chained_closures && (prev.multiline || fragment.multiline) {
                out.push('\n');
            }
        }
        out.push_str(&fragment.text);
        previous = Some(fragment);
    }

    out
}

fn convert_attribute_name(name: &str) -> String {
    if name == "class" {
        return "className".to_string();
    }
    name.to_string()
}

fn is_form_control(tag: &str) -> bool {
    matches!(tag, "input" | "textarea" | "select")
}

/// Split an iteration expression into item binding, index binding, and the
/// source expression.
fn parse_iteration(value: &str) -> (String, String, String) {
    if let Some(caps) = ITERATION_RE.captures(value) {
        let item = caps.get(1).unwrap().as_str().to_string();
        let index = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "index".to_string());
        let source = caps.get(3).unwrap().as_str().trim().to_string();
        (item, index, source)
    } else {
        ("item".to_string(), "index".to_string(), value.trim().to_string())
    }
}
