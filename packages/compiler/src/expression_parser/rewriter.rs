//! Expression Rewriter
//!
//! Rewrites free identifiers and assignment expressions inside template
//! bindings and method/computed bodies according to scope classification.
//! Operates over the lexer's token stream and splices replacements back
//! into otherwise untouched source text, so string literals, member
//! accesses, and object keys are guarded structurally.

use crate::scope::{ScopeContext, ScopeKind};
use crate::util;
use crate::EmitProfile;

use super::lexer::{Lexer, Token};

/// Per-fragment rewrite options.
#[derive(Debug, Clone, Copy)]
pub struct RewriteOptions<'a> {
    /// The fragment is an event-handler statement.
    pub event_handler: bool,
    /// Append an implicit `event` argument to bare method references in
    /// event-handler context.
    pub implicit_event_arg: bool,
    pub profile: EmitProfile,
    /// Iteration-local names that must never be rewritten.
    pub shadowed: &'a [String],
}

impl Default for RewriteOptions<'static> {
    fn default() -> Self {
        RewriteOptions {
            event_handler: false,
            implicit_event_arg: false,
            profile: EmitProfile::Closures,
            shadowed: &[],
        }
    }
}

impl<'a> RewriteOptions<'a> {
    pub fn event_handler(profile: EmitProfile, implicit_event_arg: bool) -> Self {
        RewriteOptions {
            event_handler: true,
            implicit_event_arg,
            profile,
            shadowed: &[],
        }
    }

    pub fn with_shadowed(self, shadowed: &'a [String]) -> Self {
        RewriteOptions { shadowed, ..self }
    }
}

/// Rewrite an expression or statement fragment.
pub fn rewrite(scope: &ScopeContext, source: &str, opts: &RewriteOptions) -> String {
    let tokens = Lexer::new().tokenize(source);
    if tokens.iter().any(|t| t.is_error()) {
        // Unlexable fragments pass through for manual review.
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut i = 0usize;

    while i < tokens.len() {
        let token = &tokens[i];
        if !token.is_identifier() {
            i += 1;
            continue;
        }

        let name = token.str_value.as_str();
        if opts.shadowed.iter().any(|s| s == name) {
            i += 1;
            continue;
        }

        let prev = if i > 0 { Some(&tokens[i - 1]) } else { None };
        let preceded_by_dot = prev
            .map(|p| p.is_character('.') || p.is_operator("?."))
            .unwrap_or(false);
        // `this.<name>` is the canonical owned-member access form and is
        // always rewritten; any other receiver protects the member name.
        let this_receiver = preceded_by_dot && i >= 2 && tokens[i - 2].is_keyword_this();
        if preceded_by_dot && !this_receiver {
            i += 1;
            continue;
        }

        let next = tokens.get(i + 1);
        // Object-literal key position.
        if next.map(|n| n.is_character(':')).unwrap_or(false) {
            i += 1;
            continue;
        }

        let kind = match scope.classify(name) {
            Some(kind) => kind,
            None => {
                i += 1;
                continue;
            }
        };

        let replace_start = if this_receiver {
            tokens[i - 2].index
        } else {
            token.index
        };

        // Assignment pass: a state or settable-computed left-hand side
        // becomes a setter invocation wrapping the rewritten right-hand
        // side. Prop and method left-hand sides are left untouched.
        if next.map(|n| n.is_assignment_operator()).unwrap_or(false) {
            let transformable = matches!(kind, ScopeKind::State)
                || (kind == ScopeKind::Computed && scope.has_computed_setter(name));

            if !transformable {
                i += 1;
                continue;
            }

            let op = next.unwrap().str_value.clone();
            if let Some((rhs_end_byte, terminator_index)) = rhs_extent(&tokens, i + 2) {
                let rhs_src = &source[tokens[i + 2].index..rhs_end_byte];
                let rhs = rewrite(scope, rhs_src, opts);
                let replacement = setter_call(scope, name, kind, &op, rhs.trim(), opts.profile);

                out.push_str(&source[cursor..replace_start]);
                out.push_str(&replacement);
                cursor = rhs_end_byte;
                i = terminator_index;
                continue;
            }

            i += 1;
            continue;
        }

        let replacement = match kind {
            ScopeKind::Method => {
                let target = util::to_method_name(name);
                let followed_by_call = next.map(|n| n.is_character('(')).unwrap_or(false);
                if followed_by_call {
                    target
                } else if opts.event_handler && opts.implicit_event_arg {
                    format!("{}(event)", target)
                } else {
                    format!("{}()", target)
                }
            }
            ScopeKind::Computed => match opts.profile {
                EmitProfile::Closures => format!("{}()", util::to_compute_name(name)),
                EmitProfile::ComputedState => {
                    format!("computedState.{}", util::convert_prop_or_state_name(name))
                }
            },
            ScopeKind::State => util::to_state_name(name),
            ScopeKind::Prop => format!("props.{}", util::to_prop_name(name)),
        };

        out.push_str(&source[cursor..replace_start]);
        out.push_str(&replacement);
        cursor = token.end;
        i += 1;
    }

    out.push_str(&source[cursor..]);
    out
}

/// Right-hand-side extent: from `start` up to the first depth-0 `;` or an
/// unbalanced closing bracket. Returns the end byte and the terminator's
/// token index, or `None` when there is no right-hand side at all.
fn rhs_extent(tokens: &[Token], start: usize) -> Option<(usize, usize)> {
    if start >= tokens.len() {
        return None;
    }

    let mut depth: i32 = 0;
    let mut j = start;
    while j < tokens.len() {
        let token = &tokens[j];
        if depth == 0 && token.is_character(';') {
            break;
        }
        if token.is_character('(') || token.is_character('[') || token.is_character('{') {
            depth += 1;
        } else if token.is_character(')') || token.is_character(']') || token.is_character('}') {
            if depth == 0 {
                break;
            }
            depth -= 1;
        }
        j += 1;
    }

    if j == start {
        None
    } else {
        Some((tokens[j - 1].end, j))
    }
}

fn setter_call(
    scope: &ScopeContext,
    name: &str,
    kind: ScopeKind,
    op: &str,
    rhs: &str,
    profile: EmitProfile,
) -> String {
    debug_assert!(kind == ScopeKind::State || scope.has_computed_setter(name));

    match kind {
        ScopeKind::State => {
            let setter = util::to_state_setter_name(name);
            if op == "=" {
                format!("{}({})", setter, rhs)
            } else {
                let base_op = &op[..op.len() - 1];
                format!(
                    "{}({} {} ({}))",
                    setter,
                    util::to_state_name(name),
                    base_op,
                    rhs
                )
            }
        }
        ScopeKind::Computed => match profile {
            EmitProfile::Closures => {
                let setter = util::to_compute_setter_name(name);
                if op == "=" {
                    format!("{}({})", setter, rhs)
                } else {
                    let base_op = &op[..op.len() - 1];
                    format!(
                        "{}({}() {} ({}))",
                        setter,
                        util::to_compute_name(name),
                        base_op,
                        rhs
                    )
                }
            }
            EmitProfile::ComputedState => {
                format!(
                    "computedState.{} {} {}",
                    util::convert_prop_or_state_name(name),
                    op,
                    rhs
                )
            }
        },
        _ => unreachable!("setter calls only exist for state and settable computed"),
    }
}
