//! Grammar validation pass.
//!
//! Walks the token stream against the JSON grammar without building a
//! tree, on its own lexer so an in-progress parse never shares cursor
//! state with it. The outcome is a plain boolean: every violation,
//! including lex failures, is caught at the `validate` boundary.
//!
//! ```text
//! value   := object | array | string | number | true | false | null
//! object  := '{' (string ':' value (',' string ':' value)*)? '}'
//! array   := '[' (value (',' value)*)? ']'
//! ```

use crate::error::{JedError, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Check `text` against the JSON grammar. Trailing content after one
/// complete top-level value is invalid.
pub fn validate(text: &str) -> bool {
    Validator::new(text).run().is_ok()
}

struct Validator<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Validator<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            current: Token {
                kind: TokenKind::End,
                text: String::new(),
            },
        }
    }

    fn run(&mut self) -> Result<()> {
        self.lexer.reset();
        self.bump()?;
        self.value()?;
        if self.current.kind != TokenKind::End {
            return Err(self.error("trailing content after top-level value"));
        }
        Ok(())
    }

    fn bump(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: &str) -> JedError {
        JedError::Parse {
            line: self.lexer.line(),
            column: self.lexer.column(),
            message: message.to_string(),
        }
    }

    fn value(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::LeftBrace => self.object(),
            TokenKind::LeftBracket => self.array(),
            TokenKind::Str
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => self.bump(),
            _ => Err(self.error("unexpected token")),
        }
    }

    fn object(&mut self) -> Result<()> {
        self.bump()?; // past '{'
        if self.current.kind == TokenKind::RightBrace {
            return self.bump();
        }
        loop {
            if self.current.kind != TokenKind::Str {
                return Err(self.error("expected string key"));
            }
            self.bump()?;
            if self.current.kind != TokenKind::Colon {
                return Err(self.error("expected ':' after object key"));
            }
            self.bump()?;
            self.value()?;
            if self.current.kind == TokenKind::Comma {
                self.bump()?;
            } else {
                break;
            }
        }
        if self.current.kind != TokenKind::RightBrace {
            return Err(self.error("expected '}'"));
        }
        self.bump()
    }

    fn array(&mut self) -> Result<()> {
        self.bump()?; // past '['
        if self.current.kind == TokenKind::RightBracket {
            return self.bump();
        }
        loop {
            self.value()?;
            if self.current.kind == TokenKind::Comma {
                self.bump()?;
            } else {
                break;
            }
        }
        if self.current.kind != TokenKind::RightBracket {
            return Err(self.error("expected ']'"));
        }
        self.bump()
    }
}
