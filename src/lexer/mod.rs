//! Byte-level scanner that turns Monkey source text into a [`Token`] stream.
//!
//! The lexer is single-pass and stateful: it owns a cursor into the input
//! and a one-byte lookahead. Input is treated as a byte stream of
//! ASCII-range characters — there is no Unicode-aware scanning.

use crate::token::{lookup_ident, Token, TokenKind};

/// Scans Monkey source text one token at a time.
///
/// Callers drain it by repeatedly calling [`Lexer::next_token`] until it
/// returns a token of kind [`TokenKind::Eof`]. The lexer is not restartable.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: impl AsRef<str>) -> Self {
        let mut lexer = Self {
            input: input.as_ref().as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Produces the next token, consuming it from the input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Lt, "<"),
            b'>' => Token::new(TokenKind::Gt, ">"),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b':' => Token::new(TokenKind::Colon, ":"),
            b',' => Token::new(TokenKind::Comma, ","),
            b'(' => Token::new(TokenKind::Lparen, "("),
            b')' => Token::new(TokenKind::Rparen, ")"),
            b'{' => Token::new(TokenKind::Lbrace, "{"),
            b'}' => Token::new(TokenKind::Rbrace, "}"),
            b'[' => Token::new(TokenKind::Lbracket, "["),
            b']' => Token::new(TokenKind::Rbracket, "]"),
            b'"' => return self.read_string(),
            0 => Token::eof(),
            b if is_letter(b) => return self.read_identifier(),
            b if is_digit(b) => return self.read_number(),
            other => Token::new(TokenKind::Illegal, (other as char).to_string()),
        };

        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        let literal = self.slice(start, self.position);
        let kind = lookup_ident(&literal);
        Token::new(kind, literal)
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        Token::new(TokenKind::Int, self.slice(start, self.position))
    }

    /// Reads a `"`-delimited string. Monkey has no escape sequences, so the
    /// bytes between the quotes are taken verbatim. If the closing quote is
    /// never found, the literal runs to end-of-input and the token kind is
    /// `Illegal` rather than looping forever.
    fn read_string(&mut self) -> Token {
        self.read_char(); // consume opening quote
        let start = self.position;

        while self.ch != b'"' && self.ch != 0 {
            self.read_char();
        }

        let literal = self.slice(start, self.position);

        if self.ch == 0 {
            return Token::new(TokenKind::Illegal, literal);
        }

        self.read_char(); // consume closing quote
        Token::new(TokenKind::String, literal)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
