//! Markup Parser
//!
//! Converts markup tokens into a node tree, recovering from mismatched and
//! unclosed tags instead of aborting.

use smallvec::SmallVec;

use super::ast::{Attribute, Comment, Element, Node, Text};
use super::html_tags::is_void_element;
use super::lexer::{tokenize, Token};
use crate::parse_util::{ParseError, ParseSourceSpan};

/// Parse tree result
#[derive(Debug, Clone)]
pub struct ParseTreeResult {
    pub root_nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
}

/// Template parser entry point.
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    pub fn parse(&self, source: &str) -> ParseTreeResult {
        let tokenize_result = tokenize(source);
        let builder = TreeBuilder::build(tokenize_result.tokens);

        let mut errors = tokenize_result.errors;
        errors.extend(builder.errors);

        ParseTreeResult {
            root_nodes: builder.root_nodes,
            errors,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

struct Frame {
    name: String,
    attrs: SmallVec<[Attribute; 4]>,
    start_span: ParseSourceSpan,
    children: Vec<Node>,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    root_nodes: Vec<Node>,
    errors: Vec<ParseError>,
    pending: Option<Frame>,
}

impl TreeBuilder {
    fn build(tokens: Vec<Token>) -> Self {
        let mut builder = TreeBuilder {
            stack: Vec::new(),
            root_nodes: Vec::new(),
            errors: Vec::new(),
            pending: None,
        };

        for token in tokens {
            builder.consume(token);
        }
        builder.finish();

        builder
    }

    fn consume(&mut self, token: Token) {
        match token {
            Token::TagOpenStart { name, span } => {
                self.flush_pending(span);
                self.pending = Some(Frame {
                    name,
                    attrs: SmallVec::new(),
                    start_span: span,
                    children: Vec::new(),
                });
            }
            Token::Attribute { name, value, span } => {
                if let Some(frame) = self.pending.as_mut() {
                    frame.attrs.push(Attribute::new(name, value, span));
                }
            }
            Token::TagOpenEnd { span } => {
                if let Some(frame) = self.pending.take() {
                    if is_void_element(&frame.name) {
                        self.complete(frame, false, span);
                    } else {
                        self.stack.push(frame);
                    }
                }
            }
            Token::TagOpenEndVoid { span } => {
                if let Some(frame) = self.pending.take() {
                    self.complete(frame, true, span);
                }
            }
            Token::TagClose { name, span } => {
                self.flush_pending(span);
                self.consume_close(name, span);
            }
            Token::Text { value, span } => {
                self.flush_pending(span);
                self.attach(Node::Text(Text {
                    value,
                    source_span: span,
                }));
            }
            Token::Comment { value, span } => {
                self.flush_pending(span);
                self.attach(Node::Comment(Comment {
                    value,
                    source_span: span,
                }));
            }
        }
    }

    /// A tag-open sequence interrupted by another construct (lexer
    /// recovery); materialize what was collected so far.
    fn flush_pending(&mut self, span: ParseSourceSpan) {
        if let Some(frame) = self.pending.take() {
            if is_void_element(&frame.name) {
                self.complete(frame, false, span);
            } else {
                self.stack.push(frame);
            }
        }
    }

    fn consume_close(&mut self, name: String, span: ParseSourceSpan) {
        let matching = self.stack.iter().rposition(|f| f.name == name);

        match matching {
            None => {
                self.errors.push(ParseError::new(
                    span,
                    format!("Unexpected closing tag \"{}\"", name),
                ));
            }
            Some(index) => {
                while self.stack.len() > index + 1 {
                    let frame = self.stack.pop().unwrap();
                    self.errors.push(ParseError::new(
                        frame.start_span,
                        format!("Unclosed tag \"{}\"", frame.name),
                    ));
                    self.complete(frame, false, span);
                }
                let frame = self.stack.pop().unwrap();
                self.complete(frame, false, span);
            }
        }
    }

    fn complete(&mut self, frame: Frame, is_self_closing: bool, end_span: ParseSourceSpan) {
        let is_void = is_void_element(&frame.name);
        let element = Element {
            name: frame.name,
            attrs: frame.attrs,
            children: frame.children,
            is_self_closing,
            is_void,
            source_span: ParseSourceSpan::new(frame.start_span.start, end_span.end),
        };
        self.attach(Node::Element(element));
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root_nodes.push(node),
        }
    }

    fn finish(&mut self) {
        let end = self
            .stack
            .last()
            .map(|f| f.start_span)
            .unwrap_or_else(ParseSourceSpan::empty);
        if let Some(frame) = self.pending.take() {
            self.errors.push(ParseError::new(
                frame.start_span,
                format!("Unclosed tag \"{}\"", frame.name),
            ));
            self.stack.push(frame);
        }
        while let Some(frame) = self.stack.pop() {
            self.errors.push(ParseError::new(
                frame.start_span,
                format!("Unclosed tag \"{}\"", frame.name),
            ));
            self.complete(frame, false, end);
        }
    }
}
