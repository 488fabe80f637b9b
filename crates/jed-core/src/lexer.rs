//! JSON tokenizer with a restartable cursor.
//!
//! Each pass over a document (parse, validate) constructs its own `Lexer`
//! over the same immutable text, so two passes never share scan position.
//! Line and column counters advance per consumed byte, with a newline
//! bumping the line and resetting the column.
//!
//! String tokens capture the text between two unescaped double quotes
//! verbatim: a quote preceded by `\` does not terminate the token, but the
//! escape sequence itself is copied through undecoded. Number tokens are a
//! maximal run of digit/sign/dot bytes with no grammar check at lex time
//! (`1.2.3` lexes fine and only fails when the parser converts it to
//! `f64`). Keyword tokens are maximal alphabetic runs that must equal
//! `true`, `false`, or `null` exactly.

use crate::error::{JedError, Result};

/// Token types produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Str,
    Number,
    True,
    False,
    Null,
    /// Input exhausted.
    End,
}

/// A lexical unit: kind plus the literal text it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Tokenizer over an immutable input buffer.
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current 1-based column of the cursor.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Rewind the cursor to the start of the input for another pass.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.column = 1;
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(&b) = self.bytes.get(self.pos) {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn lex_error(&self, message: String) -> JedError {
        JedError::Lex {
            line: self.line,
            column: self.column,
            message,
        }
    }

    /// Read the next token, advancing the cursor past it. Returns an
    /// [`TokenKind::End`] token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(b) = self.peek() else {
            return Ok(Token::new(TokenKind::End, ""));
        };

        match b {
            b'{' => self.single(TokenKind::LeftBrace, "{"),
            b'}' => self.single(TokenKind::RightBrace, "}"),
            b'[' => self.single(TokenKind::LeftBracket, "["),
            b']' => self.single(TokenKind::RightBracket, "]"),
            b',' => self.single(TokenKind::Comma, ","),
            b':' => self.single(TokenKind::Colon, ":"),
            b'"' => self.read_string(),
            b'-' | b'0'..=b'9' => Ok(self.read_number()),
            _ if b.is_ascii_alphabetic() => self.read_keyword(),
            _ => {
                let shown = if b.is_ascii_graphic() {
                    (b as char).to_string()
                } else {
                    format!("0x{b:02x}")
                };
                Err(self.lex_error(format!("unexpected character '{shown}'")))
            }
        }
    }

    fn single(&mut self, kind: TokenKind, text: &str) -> Result<Token> {
        self.advance();
        Ok(Token::new(kind, text))
    }

    fn read_string(&mut self) -> Result<Token> {
        self.advance(); // opening quote
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.lex_error("unterminated string".to_string())),
                Some(b'"') => break,
                Some(b'\\') => {
                    // Escaped character: copied through verbatim, and the
                    // quote it may hide does not terminate the token.
                    self.advance();
                    self.advance();
                }
                Some(_) => self.advance(),
            }
        }
        let end = self.pos;
        self.advance(); // closing quote
        Ok(Token::new(TokenKind::Str, &self.src[start..end]))
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+' {
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Number, &self.src[start..self.pos])
    }

    fn read_keyword(&mut self) -> Result<Token> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphabetic() {
                self.advance();
            } else {
                break;
            }
        }
        let word = &self.src[start..self.pos];
        match word {
            "true" => Ok(Token::new(TokenKind::True, "true")),
            "false" => Ok(Token::new(TokenKind::False, "false")),
            "null" => Ok(Token::new(TokenKind::Null, "null")),
            _ => Err(self.lex_error(format!("invalid keyword '{word}'"))),
        }
    }
}
