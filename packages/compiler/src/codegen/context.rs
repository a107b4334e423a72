//! Emit Context
//!
//! Explicit, immutable compilation context threaded through the JSX
//! compiler's recursion instead of ambient depth/prefix state.

use crate::util;

#[derive(Debug, Clone)]
pub struct EmitContext {
    pub depth: usize,
    /// Text children are only meaningful inside an open JSX container.
    pub inside_jsx: bool,
    /// Direct child of the transparent `<template>` container; duplicate
    /// class contributions are deduplicated here.
    pub template_root: bool,
    /// Iteration-local names shadowing the component scope.
    pub shadowed: Vec<String>,
}

impl EmitContext {
    pub fn root() -> Self {
        EmitContext {
            depth: 0,
            inside_jsx: false,
            template_root: false,
            shadowed: Vec::new(),
        }
    }

    /// Context for the children of an ordinary element.
    pub fn child(&self) -> Self {
        EmitContext {
            depth: self.depth + 1,
            inside_jsx: true,
            template_root: false,
            shadowed: self.shadowed.clone(),
        }
    }

    /// Context for the children of the transparent template container.
    pub fn template_child(&self) -> Self {
        EmitContext {
            template_root: true,
            ..self.child()
        }
    }

    /// Same frame, `extra` levels deeper (closure and iteration bodies).
    pub fn deeper(&self, extra: usize) -> Self {
        EmitContext {
            depth: self.depth + extra,
            inside_jsx: true,
            template_root: false,
            shadowed: self.shadowed.clone(),
        }
    }

    pub fn indent(&self, extra: usize) -> String {
        util::indent_for_depth(self.depth + extra)
    }
}
