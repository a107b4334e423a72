//! Options Object Extractor
//!
//! Recursive-descent reader over expression tokens that reduces an options
//! object literal into `JsValue`s. Function members are captured as source
//! text (the downstream rewriter is textual); free identifiers become
//! `ExternalRef` placeholders instead of failing.

use indexmap::IndexMap;

use super::ast::{JsFunction, JsValue, TypeCtor};
use crate::error::{CompilerError, Result};
use crate::expression_parser::lexer::{Lexer, Token};

/// Store-mapping helpers recognized in spread position.
const MAP_HELPERS: &[&str] = &["mapState", "mapGetters", "mapActions", "mapMutations"];

pub struct ScriptParser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    index: usize,
    pub review_notes: Vec<String>,
}

impl<'a> ScriptParser<'a> {
    pub fn new(src: &'a str) -> Result<Self> {
        let tokens = Lexer::new().tokenize(src);
        if let Some(err) = tokens.iter().find(|t| t.is_error()) {
            return Err(CompilerError::parse_error(err.str_value.clone()));
        }
        Ok(ScriptParser {
            src,
            tokens,
            index: 0,
            review_notes: Vec::new(),
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.index + ahead)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn at_character(&self, ch: char) -> bool {
        self.peek().map(|t| t.is_character(ch)).unwrap_or(false)
    }

    fn at_operator(&self, op: &str) -> bool {
        self.peek().map(|t| t.is_operator(op)).unwrap_or(false)
    }

    fn expect_character(&mut self, ch: char) -> Result<Token> {
        match self.bump() {
            Some(token) if token.is_character(ch) => Ok(token),
            Some(token) => Err(CompilerError::parse_error(format!(
                "expected '{}', found '{}'",
                ch, token.str_value
            ))),
            None => Err(CompilerError::parse_error(format!(
                "expected '{}', found end of input",
                ch
            ))),
        }
    }

    /// Parse the trailing options expression: a bare object literal or a
    /// single-argument wrapper call (`defineComponent({…})`,
    /// `Vue.extend({…})`).
    pub fn parse_options_expression(&mut self) -> Result<IndexMap<String, JsValue>> {
        while self.at_character(';') {
            self.bump();
        }

        // Unwrap a parenthesized expression (`({ … })`).
        if self.at_character('(') {
            self.bump();
            let object = self.parse_options_expression()?;
            if self.at_character(')') {
                self.bump();
            }
            return Ok(object);
        }

        match self.peek() {
            Some(token) if token.is_character('{') => self.parse_object(),
            Some(token) if token.is_identifier() => {
                // Wrapper callee: a dotted identifier chain.
                self.bump();
                while self.at_character('.') {
                    self.bump();
                    match self.peek() {
                        Some(t) if t.is_identifier() || t.is_keyword() => {
                            self.bump();
                        }
                        _ => {
                            return Err(CompilerError::parse_error(
                                "expected property name after '.'",
                            ))
                        }
                    }
                }
                self.expect_character('(')?;
                let object = self.parse_object()?;
                self.expect_character(')')?;
                Ok(object)
            }
            Some(token) => Err(CompilerError::parse_error(format!(
                "expected an options object expression, found '{}'",
                token.str_value
            ))),
            None => Err(CompilerError::parse_error(
                "expected an options object expression, found end of input",
            )),
        }
    }

    /// Locate the object literal returned by a thunk body and parse it.
    /// Returns an empty map when no `return {…}` is found.
    pub fn parse_thunk_return_object(&mut self) -> Result<IndexMap<String, JsValue>> {
        let mut depth: i32 = 0;
        while let Some(token) = self.peek() {
            if token.is_character('{') || token.is_character('(') || token.is_character('[') {
                depth += 1;
                self.bump();
            } else if token.is_character('}') || token.is_character(')') || token.is_character(']')
            {
                depth -= 1;
                self.bump();
            } else if token.is_keyword() && token.str_value == "return" && depth == 1 {
                self.bump();
                if self.at_character('{') {
                    return self.parse_object();
                }
                return Ok(IndexMap::new());
            } else {
                self.bump();
            }
        }
        Ok(IndexMap::new())
    }

    fn parse_object(&mut self) -> Result<IndexMap<String, JsValue>> {
        self.expect_character('{')?;
        let mut map = IndexMap::new();

        loop {
            if self.at_character('}') {
                self.bump();
                return Ok(map);
            }
            if self.peek().is_none() {
                return Err(CompilerError::parse_error("unterminated object literal"));
            }

            if self.at_operator("...") {
                self.bump();
                self.parse_spread(&mut map)?;
            } else {
                self.parse_member(&mut map)?;
            }

            if self.at_character(',') {
                self.bump();
            }
        }
    }

    fn parse_member(&mut self, map: &mut IndexMap<String, JsValue>) -> Result<()> {
        let key = self.parse_key()?;

        match self.peek() {
            Some(token) if token.is_character(':') => {
                self.bump();
                let value = self.parse_value()?;
                map.insert(key, value);
            }
            Some(token) if token.is_character('(') => {
                // Shorthand method: `name(params) { body }`
                let func = self.parse_function_tail(false)?;
                map.insert(key, JsValue::Function(func));
            }
            Some(token)
                if (key == "get" || key == "set")
                    && (token.is_identifier() || token.is_keyword() || token.is_string()) =>
            {
                // Accessor shorthand: `get name() { … }` — folded into an
                // object entry carrying get/set function keys.
                let accessor = key;
                let name = self.parse_key()?;
                let func = self.parse_function_tail(false)?;
                let entry = map
                    .entry(name)
                    .or_insert_with(|| JsValue::Object(IndexMap::new()));
                if let JsValue::Object(members) = entry {
                    members.insert(accessor, JsValue::Function(func));
                }
            }
            Some(token) if token.is_character(',') || token.is_character('}') => {
                // Shorthand property: a free reference to an outer binding.
                map.insert(key.clone(), JsValue::ExternalRef(key));
            }
            Some(token) => {
                return Err(CompilerError::parse_error(format!(
                    "unexpected token '{}' after object key '{}'",
                    token.str_value, key
                )));
            }
            None => return Err(CompilerError::parse_error("unterminated object literal")),
        }

        Ok(())
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.bump() {
            Some(token)
                if token.is_identifier()
                    || token.is_keyword()
                    || token.is_string()
                    || token.is_number() =>
            {
                Ok(token.str_value)
            }
            Some(token) => Err(CompilerError::parse_error(format!(
                "expected object key, found '{}'",
                token.str_value
            ))),
            None => Err(CompilerError::parse_error(
                "expected object key, found end of input",
            )),
        }
    }

    fn parse_value(&mut self) -> Result<JsValue> {
        let token = match self.peek() {
            Some(token) => token.clone(),
            None => return Err(CompilerError::parse_error("expected a value")),
        };

        if token.is_character('{') {
            return Ok(JsValue::Object(self.parse_object()?));
        }
        if token.is_character('[') {
            return self.parse_array();
        }
        if token.is_string() {
            self.bump();
            return Ok(JsValue::Str(token.str_value));
        }
        if token.is_number() {
            self.bump();
            return Ok(number_value(&token));
        }
        if token.is_keyword() {
            match token.str_value.as_str() {
                "true" => {
                    self.bump();
                    return Ok(JsValue::Bool(true));
                }
                "false" => {
                    self.bump();
                    return Ok(JsValue::Bool(false));
                }
                "null" => {
                    self.bump();
                    return Ok(JsValue::Null);
                }
                "undefined" => {
                    self.bump();
                    return Ok(JsValue::Undefined);
                }
                "function" => {
                    self.bump();
                    // Skip an optional function name.
                    if self.peek().map(|t| t.is_identifier()).unwrap_or(false) {
                        self.bump();
                    }
                    let func = self.parse_function_tail(false)?;
                    return Ok(JsValue::Function(func));
                }
                "new" => {
                    self.bump();
                    let value = self.parse_value()?;
                    let text = format!("new {}", value.to_js_source());
                    self.review_notes
                        .push(format!("constructor call left unresolved: {}", text));
                    return Ok(JsValue::ExternalRef(text));
                }
                other => {
                    return Err(CompilerError::parse_error(format!(
                        "unexpected keyword '{}' in value position",
                        other
                    )));
                }
            }
        }
        if token.is_operator("-") {
            self.bump();
            match self.bump() {
                Some(num) if num.is_number() => {
                    return Ok(match number_value(&num) {
                        JsValue::Number(v) => JsValue::Number(-v),
                        JsValue::BigInt(digits) => JsValue::BigInt(format!("-{}", digits)),
                        other => other,
                    });
                }
                _ => return Err(CompilerError::parse_error("expected number after '-'")),
            }
        }
        if token.is_character('(') {
            return self.parse_parenthesized_or_arrow();
        }
        if token.is_identifier() {
            return self.parse_identifier_value();
        }

        Err(CompilerError::parse_error(format!(
            "unexpected token '{}' in value position",
            token.str_value
        )))
    }

    fn parse_array(&mut self) -> Result<JsValue> {
        self.expect_character('[')?;
        let mut items = Vec::new();

        loop {
            if self.at_character(']') {
                self.bump();
                return Ok(JsValue::Array(items));
            }
            if self.peek().is_none() {
                return Err(CompilerError::parse_error("unterminated array literal"));
            }
            if self.at_operator("...") {
                self.bump();
                let value = self.parse_value()?;
                self.review_notes.push(format!(
                    "array spread left unresolved: ...{}",
                    value.to_js_source()
                ));
                items.push(value);
            } else {
                items.push(self.parse_value()?);
            }
            if self.at_character(',') {
                self.bump();
            }
        }
    }

    fn parse_identifier_value(&mut self) -> Result<JsValue> {
        let first = self.bump().unwrap();

        // Single-parameter arrow: `value => …`
        if self.at_operator("=>") {
            self.bump();
            let (body, has_block_body) = self.parse_arrow_body()?;
            return Ok(JsValue::Function(JsFunction {
                params: first.str_value,
                body,
                is_arrow: true,
                has_block_body,
            }));
        }

        let mut name = first.str_value.clone();
        let mut is_chain = false;
        while self.at_character('.') {
            self.bump();
            match self.peek() {
                Some(t) if t.is_identifier() || t.is_keyword() => {
                    name.push('.');
                    name.push_str(&t.str_value);
                    self.bump();
                    is_chain = true;
                }
                _ => break,
            }
        }

        if self.at_character('(') {
            let args = self.capture_parens()?;
            let text = format!("{}({})", name, args);
            self.review_notes
                .push(format!("call left unresolved: {}", text));
            return Ok(JsValue::ExternalRef(text));
        }

        if !is_chain {
            if let Some(ctor) = TypeCtor::from_name(&name) {
                return Ok(JsValue::TypeRef(ctor));
            }
        }

        Ok(JsValue::ExternalRef(name))
    }

    fn parse_parenthesized_or_arrow(&mut self) -> Result<JsValue> {
        // Scan ahead for the token following the matching ')'.
        let mut depth = 0usize;
        let mut lookahead = self.index;
        while let Some(token) = self.tokens.get(lookahead) {
            if token.is_character('(') {
                depth += 1;
            } else if token.is_character(')') {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            lookahead += 1;
        }
        let after = self.tokens.get(lookahead + 1);
        let is_arrow = after.map(|t| t.is_operator("=>")).unwrap_or(false);

        if is_arrow {
            let params = self.capture_parens()?;
            self.bump(); // '=>'
            let (body, has_block_body) = self.parse_arrow_body()?;
            return Ok(JsValue::Function(JsFunction {
                params,
                body,
                is_arrow: true,
                has_block_body,
            }));
        }

        let start = self.peek().map(|t| t.index).unwrap_or(0);
        self.capture_parens()?;
        let end = self.tokens[self.index - 1].end;
        let text = self.src[start..end].to_string();
        Ok(JsValue::ExternalRef(text))
    }

    fn parse_arrow_body(&mut self) -> Result<(String, bool)> {
        if self.at_character('{') {
            Ok((self.capture_block()?, true))
        } else {
            Ok((self.capture_expression_text()?, false))
        }
    }

    /// Shorthand-method / function tail: `(params) { body }`.
    fn parse_function_tail(&mut self, is_arrow: bool) -> Result<JsFunction> {
        let params = self.capture_parens()?;
        let body = self.capture_block()?;
        Ok(JsFunction {
            params,
            body,
            is_arrow,
            has_block_body: true,
        })
    }

    /// Consume a balanced `(…)` group, returning the inner text.
    fn capture_parens(&mut self) -> Result<String> {
        let open = self.expect_character('(')?;
        let start = open.end;
        let mut depth = 1usize;

        while let Some(token) = self.bump() {
            if token.is_character('(') {
                depth += 1;
            } else if token.is_character(')') {
                depth -= 1;
                if depth == 0 {
                    return Ok(self.src[start..token.index].to_string());
                }
            }
        }
        Err(CompilerError::parse_error("unbalanced parentheses"))
    }

    /// Consume a balanced `{…}` block, returning the text including braces.
    fn capture_block(&mut self) -> Result<String> {
        let open = self.expect_character('{')?;
        let start = open.index;
        let mut depth = 1usize;

        while let Some(token) = self.bump() {
            if token.is_character('{') {
                depth += 1;
            } else if token.is_character('}') {
                depth -= 1;
                if depth == 0 {
                    return Ok(self.src[start..token.end].to_string());
                }
            }
        }
        Err(CompilerError::parse_error("unbalanced braces"))
    }

    /// Capture expression text up to a depth-0 terminator without consuming
    /// the terminator itself.
    fn capture_expression_text(&mut self) -> Result<String> {
        let start = match self.peek() {
            Some(token) => token.index,
            None => return Err(CompilerError::parse_error("expected an expression")),
        };
        let mut end = start;
        let mut depth: i32 = 0;

        while let Some(token) = self.peek() {
            if depth == 0
                && (token.is_character(',')
                    || token.is_character('}')
                    || token.is_character(')')
                    || token.is_character(']')
                    || token.is_character(';'))
            {
                break;
            }
            if token.is_character('(') || token.is_character('[') || token.is_character('{') {
                depth += 1;
            } else if token.is_character(')') || token.is_character(']') || token.is_character('}')
            {
                depth -= 1;
            }
            end = token.end;
            self.bump();
        }

        Ok(self.src[start..end].to_string())
    }

    /// A spread entry inside an object literal. Recognized store-mapping
    /// helper calls contribute stub accessor entries; anything else
    /// degrades to a review note.
    fn parse_spread(&mut self, map: &mut IndexMap<String, JsValue>) -> Result<()> {
        let is_helper = self
            .peek()
            .map(|t| t.is_identifier() && MAP_HELPERS.contains(&t.str_value.as_str()))
            .unwrap_or(false)
            && self
                .peek_at(1)
                .map(|t| t.is_character('('))
                .unwrap_or(false);

        if !is_helper {
            let text = self.capture_expression_text()?;
            self.review_notes
                .push(format!("could not resolve spread '...{}'", text));
            return Ok(());
        }

        let helper = self.bump().unwrap().str_value;
        self.expect_character('(')?;

        let mut names: Vec<String> = Vec::new();
        loop {
            if self.at_character(')') {
                self.bump();
                break;
            }
            if self.peek().is_none() {
                return Err(CompilerError::parse_error("unbalanced parentheses"));
            }
            let arg = self.parse_value()?;
            match arg {
                JsValue::Array(items) => {
                    names = items
                        .iter()
                        .filter_map(|item| match item {
                            JsValue::Str(s) => Some(s.clone()),
                            _ => None,
                        })
                        .collect();
                }
                JsValue::Object(entries) => {
                    names = entries.keys().cloned().collect();
                }
                // A leading namespace string argument carries no names.
                _ => {}
            }
            if self.at_character(',') {
                self.bump();
            }
        }

        if names.is_empty() {
            self.review_notes.push(format!(
                "store mapping '{}' contributed no recognizable names",
                helper
            ));
        }
        for name in names {
            map.insert(
                name.clone(),
                JsValue::StubAccessor {
                    name,
                    origin: helper.clone(),
                },
            );
        }

        Ok(())
    }
}

fn number_value(token: &Token) -> JsValue {
    if token.str_value.ends_with('n') {
        JsValue::BigInt(token.str_value.trim_end_matches('n').to_string())
    } else {
        JsValue::Number(token.num_value)
    }
}
