//! Token model produced by the scanner.

use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End-of-input marker; always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Map reserved-word text to its token kind. Matching is exact and
    /// case-sensitive on the whole lexeme; anything else is an identifier.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::And),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// A decoded literal value carried by string and number tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Parsed double-precision value of a number lexeme.
    Number(f64),
    /// String payload with the surrounding quotes stripped; no escape decoding.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // {:?} keeps the trailing ".0" on whole numbers.
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// A scanned token: kind, exact source text, optional decoded literal, and
/// the 1-based line where the token begins. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source substring consumed for this token.
    pub lexeme: String,
    /// The decoded literal value, for string and number tokens only.
    pub literal: Option<Literal>,
    /// The 1-based line number where this token begins.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, literal: Option<Literal>, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, " {}", literal),
            None => write!(f, " nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword_exact_match() {
        assert_eq!(TokenKind::from_keyword("class"), Some(TokenKind::Class));
        assert_eq!(TokenKind::from_keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::from_keyword("classroom"), None);
        assert_eq!(TokenKind::from_keyword("Class"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn test_keyword_table_covers_all_sixteen() {
        let keywords = [
            "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in keywords {
            let kind = TokenKind::from_keyword(word);
            assert!(kind.is_some(), "missing keyword: {}", word);
            assert!(kind.is_some_and(|k| k.is_keyword()));
        }
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(
            TokenKind::Number,
            "1234".to_string(),
            Some(Literal::Number(1234.0)),
            1,
        );
        assert_eq!(token.to_string(), "Number 1234 1234.0");

        let token = Token::new(TokenKind::Semicolon, ";".to_string(), None, 2);
        assert_eq!(token.to_string(), "Semicolon ; nil");
    }
}
