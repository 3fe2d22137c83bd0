//! Token — the flat unit produced by the lexer and consumed by the parser.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Any maximal run of non-whitespace, non-parenthesis characters.
    Identifier(String),
    /// A run made only of ASCII digits.
    Number(String),
}

impl Token {
    /// The text of a word token (identifier or number), `None` for parentheses.
    ///
    /// Numbers are accepted wherever an identifier is, so the parser asks for
    /// words through this accessor rather than matching `Identifier` alone.
    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Identifier(text) | Token::Number(text) => Some(text),
            Token::OpenParen | Token::CloseParen => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Identifier(text) | Token::Number(text) => write!(f, "{text}"),
        }
    }
}
