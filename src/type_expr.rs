//! Type expressions as written in a declaration model.
//!
//! Grammar:
//!
//! ```text
//! type     := wildcard | named dims
//! wildcard := '?' [ ('extends' | 'super') type ]
//! named    := ident ('.' ident)* [ '<' type (',' type)* '>' ]
//! dims     := ('[' ']')*
//! ```
//!
//! Names are not resolved here; `int`, `T` and `java.util.List` all parse
//! to [`TypeExpr::Named`] and are told apart when lowering.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Named { name: String, args: Vec<TypeExpr> },
    Array(Box<TypeExpr>),
    Wildcard(Option<(BoundKind, Box<TypeExpr>)>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Extends,
    Super,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} at offset {offset} in `{input}`")]
pub struct ParseError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}

pub fn parse_type_expr(input: &str) -> Result<TypeExpr, ParseError> {
    let mut parser = TypeExprParser { input, pos: 0 };
    let expr = parser.parse_type()?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(expr)
}

struct TypeExprParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeExprParser<'a> {
    fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        self.skip_whitespace();
        if self.eat('?') {
            return self.parse_wildcard_bound();
        }

        let name = self.parse_qualified_name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_type()?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected `,` or `>`"));
            }
        }

        let mut ty = TypeExpr::Named { name, args };
        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected `]`"));
            }
            ty = TypeExpr::Array(Box::new(ty));
        }
        Ok(ty)
    }

    fn parse_wildcard_bound(&mut self) -> Result<TypeExpr, ParseError> {
        self.skip_whitespace();
        let kind = match self.peek_identifier() {
            Some("extends") => BoundKind::Extends,
            Some("super") => BoundKind::Super,
            _ => return Ok(TypeExpr::Wildcard(None)),
        };
        self.parse_identifier()?;
        let bound = self.parse_type()?;
        Ok(TypeExpr::Wildcard(Some((kind, Box::new(bound)))))
    }

    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        let mut name = self.parse_identifier()?.to_string();
        while self.eat('.') {
            name.push('.');
            name.push_str(self.parse_identifier()?);
        }
        Ok(name)
    }

    fn parse_identifier(&mut self) -> Result<&'a str, ParseError> {
        self.skip_whitespace();
        let Some(ident) = self.peek_identifier() else {
            return Err(self.error("expected identifier"));
        };
        self.pos += ident.len();
        Ok(ident)
    }

    fn peek_identifier(&self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if is_identifier_start(c) => {}
            _ => return None,
        }
        let end = chars
            .find(|&(_, c)| !is_identifier_part(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError {
            input: self.input.to_string(),
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// True for a single (unqualified) identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_part),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/type_expr_tests.rs"]
mod tests;
