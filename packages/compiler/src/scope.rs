//! Scope Classifier
//!
//! Builds the per-component lookup sets used to reclassify free
//! identifiers. Built once per component, immutable thereafter.

use crate::script_parser::ast::{ComponentOptions, PropsDecl};
use crate::util;

/// Semantic category of a bare identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Method,
    Computed,
    State,
    Prop,
}

/// The four disjoint-by-precedence name sets plus the component's display
/// name and its hyphenated target form.
#[derive(Debug, Clone)]
pub struct ScopeContext {
    pub component_name: String,
    pub converted_name: String,
    pub prop_names: Vec<String>,
    pub state_names: Vec<String>,
    pub computed_names: Vec<String>,
    pub method_names: Vec<String>,
    computed_setters: Vec<String>,
}

impl ScopeContext {
    /// Enumerate the option categories' keys. Pure; `data` thunks were
    /// already reduced by the resolver.
    pub fn from_options(component_name: &str, options: &ComponentOptions) -> Self {
        let prop_names = match &options.props {
            Some(PropsDecl::Named(entries)) => entries.keys().cloned().collect(),
            // Array-style declarations expose no usable names.
            Some(PropsDecl::Listed(_)) | None => Vec::new(),
        };

        let computed_setters = options
            .computed
            .iter()
            .filter(|(_, def)| def.has_setter())
            .map(|(name, _)| name.clone())
            .collect();

        ScopeContext {
            component_name: component_name.to_string(),
            converted_name: util::to_hyphenated(component_name),
            prop_names,
            state_names: options.data.keys().cloned().collect(),
            computed_names: options.computed.keys().cloned().collect(),
            method_names: options.methods.keys().cloned().collect(),
            computed_setters,
        }
    }

    /// Classify a bare identifier. Precedence: method > computed > state >
    /// prop; unknown names stay unresolved.
    pub fn classify(&self, name: &str) -> Option<ScopeKind> {
        if self.method_names.iter().any(|n| n == name) {
            Some(ScopeKind::Method)
        } else if self.computed_names.iter().any(|n| n == name) {
            Some(ScopeKind::Computed)
        } else if self.state_names.iter().any(|n| n == name) {
            Some(ScopeKind::State)
        } else if self.prop_names.iter().any(|n| n == name) {
            Some(ScopeKind::Prop)
        } else {
            None
        }
    }

    pub fn has_computed_setter(&self, name: &str) -> bool {
        self.computed_setters.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script_parser::resolve;

    #[test]
    fn test_method_wins_over_prop() {
        let options = resolve(
            "export default {
                props: { refresh: String },
                methods: { refresh() { return 1; } },
            };",
        )
        .unwrap();
        let scope = ScopeContext::from_options("Widget", &options);
        assert_eq!(scope.classify("refresh"), Some(ScopeKind::Method));
    }

    #[test]
    fn test_precedence_chain() {
        let options = resolve(
            "export default {
                props: { value: String },
                data() { return { value: 1, count: 2 }; },
                computed: { count() { return 3; } },
            };",
        )
        .unwrap();
        let scope = ScopeContext::from_options("Widget", &options);
        assert_eq!(scope.classify("count"), Some(ScopeKind::Computed));
        assert_eq!(scope.classify("value"), Some(ScopeKind::State));
        assert_eq!(scope.classify("missing"), None);
    }
}
