//! Recursive-descent tree builder.
//!
//! The sole entry point that turns text into a [`Value`] tree. It does
//! not consult the validator: the two passes are decoupled, each over its
//! own lexer. Trailing content after the first complete value is left for
//! [`crate::validator::validate`] to flag; the builder stops at the end
//! of the value it was asked for. The same grammar parses replacement
//! literals for `set`/`create`/`move`.

use crate::error::{JedError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::types::Value;

/// Parse `text` into an owned value tree.
pub fn parse_root(text: &str) -> Result<Value> {
    Parser::new(text).parse_value()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
        }
    }

    fn error(&self, message: String) -> JedError {
        JedError::Parse {
            line: self.lexer.line(),
            column: self.lexer.column(),
            message,
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = self.lexer.next_token()?;
        self.parse_value_from(token)
    }

    fn parse_value_from(&mut self, token: Token) -> Result<Value> {
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::Str => Ok(Value::String(token.text)),
            TokenKind::Number => {
                let n = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| self.error(format!("invalid number literal '{}'", token.text)))?;
                Ok(Value::Number(n))
            }
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::End => Err(self.error("unexpected end of input".to_string())),
            _ => Err(self.error(format!("unexpected token '{}'", token.text))),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        let mut entries = Vec::new();
        let mut token = self.lexer.next_token()?;
        if token.kind == TokenKind::RightBrace {
            return Ok(Value::Object(entries));
        }
        loop {
            if token.kind != TokenKind::Str {
                return Err(self.error("expected string key in object".to_string()));
            }
            let key = token.text;
            let colon = self.lexer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(self.error("expected ':' after object key".to_string()));
            }
            let value = self.parse_value()?;
            entries.push((key, value));
            token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => token = self.lexer.next_token()?,
                TokenKind::RightBrace => return Ok(Value::Object(entries)),
                _ => return Err(self.error("expected ',' or '}' in object".to_string())),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        let mut token = self.lexer.next_token()?;
        if token.kind == TokenKind::RightBracket {
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value_from(token)?);
            token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => token = self.lexer.next_token()?,
                TokenKind::RightBracket => return Ok(Value::Array(items)),
                _ => return Err(self.error("expected ',' or ']' in array".to_string())),
            }
        }
    }
}
