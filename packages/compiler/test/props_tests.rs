/**
 * Props Interface Tests
 *
 * Type table mapping, field ordering, nesting, unions, and failure modes.
 */

use vue_compiler::codegen::props::props_interface;
use vue_compiler::script_parser::resolve;
use vue_compiler::CompilerError;

fn interface(script: &str) -> String {
    let options = resolve(script).unwrap();
    props_interface("Card", options.props.as_ref()).unwrap()
}

#[test]
fn primitive_mapping_in_declaration_order() {
    let interface = interface("export default { props: { name: String, age: Number } };");
    assert_eq!(
        interface,
        "export interface CardProps {\n  name: string;\n  age: number;\n};"
    );
}

#[test]
fn field_order_is_declaration_order_not_alphabetical() {
    let interface = interface("export default { props: { zeta: Number, alpha: String } };");
    let zeta = interface.find("zeta").unwrap();
    let alpha = interface.find("alpha").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn full_type_table() {
    let interface = interface(
        "export default { props: {
            a: String, b: Number, c: Boolean, d: BigInt, e: Object, f: Array,
        } };",
    );
    assert!(interface.contains("a: string;"));
    assert!(interface.contains("b: number;"));
    assert!(interface.contains("c: boolean;"));
    assert!(interface.contains("d: bigint;"));
    assert!(interface.contains("e: any;"));
    assert!(interface.contains("f: Array<any>;"));
}

#[test]
fn array_shorthand_becomes_a_union() {
    let interface = interface("export default { props: { size: [String, Number] } };");
    assert!(interface.contains("size: string | number;"));
}

#[test]
fn record_descriptor_uses_the_inner_type() {
    let interface =
        interface("export default { props: { title: { type: String, default: 'x' } } };");
    assert!(interface.contains("title: string;"));
    assert!(!interface.contains("default"));
}

#[test]
fn nested_descriptors_recurse() {
    let interface = interface(
        "export default { props: { address: { street: String, city: String } } };",
    );
    assert_eq!(
        interface,
        "export interface CardProps {\n  address: {\n    street: string;\n    city: string;\n  };\n};"
    );
}

#[test]
fn untyped_descriptor_is_flagged_any() {
    let interface = interface("export default { props: { legacy: { default: 5 } } };");
    assert!(interface.contains("legacy: any; // TODO: review untyped prop declaration"));
}

#[test]
fn external_reference_descriptor_is_flagged_any() {
    let interface = interface("export default { props: { validator: SomeClass } };");
    assert!(interface.contains("validator: any; // TODO: review"));
}

#[test]
fn listed_props_produce_an_empty_interface() {
    let interface = interface("export default { props: ['a', 'b'] };");
    assert_eq!(interface, "export interface CardProps {}");
}

#[test]
fn absent_props_produce_an_empty_interface() {
    let interface = interface("export default {};");
    assert_eq!(interface, "export interface CardProps {}");
}

#[test]
fn unsupported_type_value_is_fatal() {
    let options = resolve("export default { props: { bogus: 5 } };").unwrap();
    let error = props_interface("Card", options.props.as_ref()).unwrap_err();
    match error {
        CompilerError::UnsupportedType { value } => assert_eq!(value, "5"),
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
    assert!(error_to_string_names_the_value());
}

fn error_to_string_names_the_value() -> bool {
    let options = resolve("export default { props: { bogus: 5 } };").unwrap();
    let error = props_interface("Card", options.props.as_ref()).unwrap_err();
    error.to_string() == "TypeScript type \"5\" not supported"
}

#[test]
fn hyphenated_prop_names_are_camelized() {
    let interface = interface("export default { props: { 'max-width': Number } };");
    assert!(interface.contains("maxWidth: number;"));
}
