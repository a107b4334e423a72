/**
 * Options Resolver Tests
 *
 * Static extraction of the options object: section shapes, wrapper
 * unwrapping, placeholder policy for free references, and failure modes.
 */

use vue_compiler::script_parser::{
    resolve, ComponentOptions, ComputedDef, JsValue, PropsDecl, TypeCtor,
};
use vue_compiler::CompilerError;

mod sections {
    use super::*;

    #[test]
    fn extracts_all_four_sections() {
        let options = resolve(
            "export default {
                props: { name: String },
                data() { return { count: 0 }; },
                computed: { double() { return this.count * 2; } },
                methods: { go() { return 1; } },
            };",
        )
        .unwrap();

        match options.props.as_ref().unwrap() {
            PropsDecl::Named(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(
                    entries.get("name"),
                    Some(&JsValue::TypeRef(TypeCtor::String))
                );
            }
            other => panic!("expected named props, got {:?}", other),
        }
        assert_eq!(options.data.get("count"), Some(&JsValue::Number(0.0)));
        assert!(matches!(
            options.computed.get("double"),
            Some(ComputedDef::Getter(_))
        ));
        assert!(options.methods.contains_key("go"));
    }

    #[test]
    fn absent_sections_mean_empty() {
        let options = resolve("export default {};").unwrap();
        assert!(options.props.is_none());
        assert!(options.data.is_empty());
        assert!(options.computed.is_empty());
        assert!(options.methods.is_empty());
    }

    #[test]
    fn missing_script_resolves_to_empty_options() {
        assert_eq!(resolve("").unwrap(), ComponentOptions::default());
    }

    #[test]
    fn data_as_plain_object() {
        let options = resolve("export default { data: { theme: 'dark' } };").unwrap();
        assert_eq!(
            options.data.get("theme"),
            Some(&JsValue::Str("dark".to_string()))
        );
    }

    #[test]
    fn data_as_expression_arrow_thunk() {
        let options = resolve("export default { data: () => ({ flag: true }) };").unwrap();
        assert_eq!(options.data.get("flag"), Some(&JsValue::Bool(true)));
    }

    #[test]
    fn state_declaration_order_is_preserved() {
        let options =
            resolve("export default { data() { return { zeta: 1, alpha: 2, mid: 3 }; } };")
                .unwrap();
        let keys: Vec<&String> = options.data.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn listed_props_are_kept_as_a_list() {
        let options = resolve("export default { props: ['a', 'b'] };").unwrap();
        match options.props.as_ref().unwrap() {
            PropsDecl::Listed(items) => assert_eq!(items.len(), 2),
            other => panic!("expected listed props, got {:?}", other),
        }
    }

    #[test]
    fn unconverted_sections_leave_review_notes() {
        let options = resolve("export default { mounted() { return 1; } };").unwrap();
        assert!(options
            .review_notes
            .iter()
            .any(|note| note.contains("mounted")));
    }
}

mod wrappers {
    use super::*;

    #[test]
    fn define_component_wrapper_is_unwrapped() {
        let bare = resolve("export default { props: { a: String } };").unwrap();
        let wrapped = resolve("export default defineComponent({ props: { a: String } });").unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn vue_extend_wrapper_is_unwrapped() {
        let bare = resolve("export default { props: { a: String } };").unwrap();
        let wrapped = resolve("export default Vue.extend({ props: { a: String } });").unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn import_boilerplate_is_stripped() {
        let options = resolve(
            "import Vue from 'vue';\nimport { helper } from './helpers';\n\nexport default { data() { return { ok: true } ; } };",
        )
        .unwrap();
        assert_eq!(options.data.get("ok"), Some(&JsValue::Bool(true)));
    }

    #[test]
    fn evt_parameter_spelling_is_normalized() {
        let options =
            resolve("export default { methods: { hit(evt) { return evt.x; } } };").unwrap();
        let hit = options.methods.get("hit").unwrap();
        assert_eq!(hit.params, "event");
        assert!(hit.body.contains("event.x"));
    }
}

mod placeholders {
    use super::*;

    #[test]
    fn free_references_become_echoed_placeholders() {
        let options =
            resolve("export default { data() { return { theme: DEFAULT_THEME }; } };").unwrap();
        assert_eq!(
            options.data.get("theme"),
            Some(&JsValue::ExternalRef("DEFAULT_THEME".to_string()))
        );
        assert_eq!(
            options.data.get("theme").unwrap().to_js_source(),
            "'DEFAULT_THEME'"
        );
    }

    #[test]
    fn member_chain_references_are_echoed_whole() {
        let options =
            resolve("export default { data() { return { kind: Kinds.PRIMARY }; } };").unwrap();
        assert_eq!(
            options.data.get("kind"),
            Some(&JsValue::ExternalRef("Kinds.PRIMARY".to_string()))
        );
    }

    #[test]
    fn map_state_spread_produces_stub_accessors() {
        let options = resolve(
            "export default {
                computed: {
                    ...mapState(['user', 'cart']),
                    total() { return this.count; },
                },
            };",
        )
        .unwrap();

        let keys: Vec<&String> = options.computed.keys().collect();
        assert_eq!(keys, vec!["user", "cart", "total"]);
        assert!(matches!(
            options.computed.get("user"),
            Some(ComputedDef::Stub { origin }) if origin == "mapState"
        ));
    }

    #[test]
    fn map_getters_object_form_uses_alias_names() {
        let options = resolve(
            "export default { computed: { ...mapGetters({ cartTotal: 'total' }) } };",
        )
        .unwrap();
        assert!(matches!(
            options.computed.get("cartTotal"),
            Some(ComputedDef::Stub { origin }) if origin == "mapGetters"
        ));
    }

    #[test]
    fn unknown_spreads_degrade_to_review_notes() {
        let options =
            resolve("export default { computed: { ...somethingCustom() } };").unwrap();
        assert!(options.computed.is_empty());
        assert!(options
            .review_notes
            .iter()
            .any(|note| note.contains("spread")));
    }
}

mod computed_shapes {
    use super::*;

    #[test]
    fn getter_setter_pair_is_an_accessor() {
        let options = resolve(
            "export default {
                computed: {
                    label: {
                        get() { return this.raw; },
                        set(value) { this.raw = value; },
                    },
                },
            };",
        )
        .unwrap();

        let label = options.computed.get("label").unwrap();
        assert!(label.has_setter());
        assert!(matches!(
            label,
            ComputedDef::Accessor {
                get: Some(_),
                set: Some(_),
            }
        ));
    }

    #[test]
    fn plain_value_computed_is_kept_as_a_value() {
        let options = resolve("export default { computed: { answer: 42 } };").unwrap();
        assert!(matches!(
            options.computed.get("answer"),
            Some(ComputedDef::Value(JsValue::Number(v))) if *v == 42.0
        ));
    }

    #[test]
    fn arrow_methods_keep_expression_bodies() {
        let options =
            resolve("export default { methods: { jump: (distance) => distance * 2 } };").unwrap();
        let jump = options.methods.get("jump").unwrap();
        assert!(jump.is_arrow);
        assert!(!jump.has_block_body);
        assert_eq!(jump.body, "distance * 2");
    }
}

mod failures {
    use super::*;

    #[test]
    fn non_object_script_is_an_eval_failure() {
        let error = resolve("export default somethingElse").unwrap_err();
        assert!(matches!(error, CompilerError::EvalFailure { .. }));
    }

    #[test]
    fn unbalanced_script_is_an_eval_failure() {
        let error = resolve("export default { broken: ( };").unwrap_err();
        assert!(matches!(error, CompilerError::EvalFailure { .. }));
    }

    #[test]
    fn bare_number_is_an_eval_failure() {
        let error = resolve("export default 42;").unwrap_err();
        assert!(matches!(error, CompilerError::EvalFailure { .. }));
    }
}
