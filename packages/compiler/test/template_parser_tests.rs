/**
 * Template Parser Tests
 *
 * Markup lexing and tree building: shapes, directive attributes, void
 * elements, and recovery on malformed input.
 */

use vue_compiler::ml_parser::{Element, Node, Parser};

fn parse(source: &str) -> vue_compiler::ml_parser::ParseTreeResult {
    Parser::new().parse(source)
}

fn elements(nodes: &[Node]) -> Vec<&Element> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
        .collect()
}

#[test]
fn parses_nested_elements_and_text() {
    let result = parse("<div><span>hello</span></div>");
    assert!(result.errors.is_empty());

    let roots = elements(&result.root_nodes);
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "div");

    let children = elements(&roots[0].children);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "span");

    match &children[0].children[0] {
        Node::Text(text) => assert_eq!(text.value, "hello"),
        other => panic!("expected text child, got {:?}", other),
    }
}

#[test]
fn directive_attribute_names_are_preserved_in_order() {
    let result = parse(r#"<button v-if="ready" @click.stop="go" :class="kind" data-id="1" />"#);
    let roots = elements(&result.root_nodes);
    let names: Vec<&str> = roots[0].attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["v-if", "@click.stop", ":class", "data-id"]);
    assert_eq!(roots[0].attr("@click.stop").unwrap().value, "go");
}

#[test]
fn void_elements_take_no_children() {
    let result = parse("<div><br><img src='x.png'>tail</div>");
    assert!(result.errors.is_empty());

    let roots = elements(&result.root_nodes);
    let children = elements(&roots[0].children);
    assert_eq!(children.len(), 2);
    assert!(children[0].is_void);
    assert!(children[1].children.is_empty());
}

#[test]
fn self_closing_custom_elements() {
    let result = parse("<my-widget :value='a' />");
    let roots = elements(&result.root_nodes);
    assert_eq!(roots[0].name, "my-widget");
    assert!(roots[0].is_self_closing);
}

#[test]
fn interpolation_markers_stay_in_text() {
    let result = parse("<span>{{count}} items</span>");
    let roots = elements(&result.root_nodes);
    match &roots[0].children[0] {
        Node::Text(text) => assert_eq!(text.value, "{{count}} items"),
        other => panic!("expected text child, got {:?}", other),
    }
}

#[test]
fn comments_become_comment_nodes() {
    let result = parse("<div><!-- note --></div>");
    let roots = elements(&result.root_nodes);
    assert!(matches!(&roots[0].children[0], Node::Comment(c) if c.value == " note "));
}

#[test]
fn unquoted_attribute_values() {
    let result = parse("<input type=text>");
    let roots = elements(&result.root_nodes);
    assert_eq!(roots[0].attr("type").unwrap().value, "text");
}

#[test]
fn entities_are_decoded_in_text() {
    let result = parse("<span>a &amp; b</span>");
    let roots = elements(&result.root_nodes);
    match &roots[0].children[0] {
        Node::Text(text) => assert_eq!(text.value, "a & b"),
        other => panic!("expected text child, got {:?}", other),
    }
}

#[test]
fn mismatched_close_tag_recovers_with_errors() {
    let result = parse("<div><span></p></div>");
    assert!(!result.errors.is_empty());

    let roots = elements(&result.root_nodes);
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "div");
    let children = elements(&roots[0].children);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "span");
}

#[test]
fn unclosed_tags_are_reported_and_closed() {
    let result = parse("<div><span>");
    assert_eq!(result.errors.len(), 2);

    let roots = elements(&result.root_nodes);
    assert_eq!(roots.len(), 1);
    assert_eq!(elements(&roots[0].children).len(), 1);
}

#[test]
fn template_container_is_an_ordinary_element_here() {
    let result = parse("<template><div /></template>");
    let roots = elements(&result.root_nodes);
    assert_eq!(roots[0].name, "template");
    assert_eq!(elements(&roots[0].children)[0].name, "div");
}
