//! The Lox scanner/lexer.
//!
//! A single-pass character-to-token state machine. It owns the source text
//! and a cursor (`start`, `current`, `line`) and produces an eagerly
//! materialized token sequence terminated by exactly one `Eof` token.

use crate::token::{Literal, Token, TokenKind};
use rlox_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The scanner converts Lox source text into tokens.
///
/// A scanner is constructed with one immutable source string and runs
/// exactly one scan to completion; [`Scanner::scan_tokens`] consumes the
/// instance so it cannot be reused.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Offset of the current lexeme's first character.
    start: usize,
    /// Offset of the next unconsumed character.
    current: usize,
    /// Current 1-based line number, incremented on each newline consumed.
    line: u32,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Run the scan to completion and return the token sequence together
    /// with the diagnostics reported along the way.
    ///
    /// The scan never fails: malformed input produces per-character
    /// diagnostics but always yields a token sequence ending in `Eof`.
    /// Treating a non-empty diagnostic set as an overall failure is the
    /// caller's decision.
    pub fn scan_tokens(mut self) -> (Vec<Token>, DiagnosticCollection) {
        while !self.is_eof() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        (self.tokens, self.diagnostics)
    }

    /// Scan one token starting at `start`. Whitespace, comments, and invalid
    /// characters produce no token.
    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // A comment runs to the end of the line; the newline is
                    // left for the next iteration to count.
                    while !self.is_eof() && self.peek() != Some('\n') {
                        self.current += 1;
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.scan_string(),
            _ if is_digit(ch) => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),
            _ => {
                let found = ch.to_string();
                self.diagnostics.add(Diagnostic::new(
                    self.line,
                    &messages::UNEXPECTED_CHARACTER,
                    &[&found],
                ));
            }
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Scan a string literal; the opening `"` has already been consumed.
    /// Strings may span multiple lines. No escape sequences are decoded.
    fn scan_string(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_eof() {
            self.diagnostics.add(Diagnostic::new(
                self.line,
                &messages::UNTERMINATED_STRING,
                &[],
            ));
            return;
        }

        // Closing quote.
        self.current += 1;

        // Trim the surrounding quotes for the literal value.
        let value = self.chars_to_string(self.start + 1, self.current - 1);
        self.add_token_with_literal(TokenKind::String, Some(Literal::String(value)));
    }

    /// Scan a number literal: digits with an optional fractional part. A `.`
    /// not followed by a digit is left for the next token.
    fn scan_number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1;
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            // Consume the ".".
            self.current += 1;
            while self.peek().is_some_and(is_digit) {
                self.current += 1;
            }
        }

        // Digits with an optional fraction are always a valid f64.
        let value = self
            .chars_to_string(self.start, self.current)
            .parse::<f64>()
            .unwrap_or_default();
        self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    /// Scan an identifier or reserved word with maximal munch, then look the
    /// whole lexeme up in the keyword table.
    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.current += 1;
        }

        let text = self.chars_to_string(self.start, self.current);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Consume and return the character at the current position.
    #[inline]
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Consume the next character only if it equals `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Look at the next unconsumed character without advancing.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// Look one character past the next unconsumed character.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.text.get(self.current + 1).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.current >= self.text.len()
    }

    /// Emit a token for the current lexeme with no literal value.
    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    /// Emit a token whose lexeme is the span from `start` to `current`.
    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.chars_to_string(self.start, self.current);
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    /// Convert a range of chars to a String.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

/// Check if a character is a decimal digit.
#[inline]
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
fn is_alpha(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Check if a character can be part of an identifier.
#[inline]
fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}
