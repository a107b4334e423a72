//! Template AST
//!
//! Markup tree node definitions. The tree is built once per component and
//! only read by the JSX compiler; parent relationships are carried by the
//! compiler's explicit emit context rather than back-references.

use crate::parse_util::ParseSourceSpan;
use smallvec::SmallVec;

/// Node type union
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

impl Node {
    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Node::Element(e) => &e.source_span,
            Node::Text(t) => &t.source_span,
            Node::Comment(c) => &c.source_span,
        }
    }
}

/// Attribute node. Structural directives (`v-if`, `v-for`, `@click`,
/// `:value`, …) are ordinary attributes at this level; the JSX compiler
/// interprets the reserved name prefixes.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Attribute {
    pub fn new(name: String, value: String, source_span: ParseSourceSpan) -> Self {
        Attribute {
            name,
            value,
            source_span,
        }
    }
}

/// Element node
#[derive(Debug, Clone)]
pub struct Element {
    pub name: String,
    pub attrs: SmallVec<[Attribute; 4]>,
    pub children: Vec<Node>,
    pub is_self_closing: bool,
    pub is_void: bool,
    pub source_span: ParseSourceSpan,
}

impl Element {
    /// Look up an attribute by exact name.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// Text node
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

/// Comment node
#[derive(Debug, Clone)]
pub struct Comment {
    pub value: String,
    pub source_span: ParseSourceSpan,
}
