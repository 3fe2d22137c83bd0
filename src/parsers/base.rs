//! Parser trait definition and the shared token cursor.

use crate::error::ParseError;
use crate::syntax::token::Token;
use crate::syntax::types::Program;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for program parsers.
pub trait Parser {
    /// Parse a token stream into a `Program`.
    fn parse(&self, tokens: &[Token]) -> Result<Program, ParseError>;
}

// ─── TokenCursor ─────────────────────────────────────────────────────────────

/// Position cursor over a token slice, giving the parser one token of
/// lookahead plus save/restore for speculative matches.
pub struct TokenCursor<'a> {
    pub tokens: &'a [Token],
    pub pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume `(` if it is next.
    pub fn eat_open(&mut self) -> bool {
        self.eat_if(|t| matches!(t, Token::OpenParen))
    }

    /// Consume `)` if it is next.
    pub fn eat_close(&mut self) -> bool {
        self.eat_if(|t| matches!(t, Token::CloseParen))
    }

    /// Consume the identifier `keyword` if it is next.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.eat_if(|t| matches!(t, Token::Identifier(text) if text == keyword))
    }

    /// Consume a word token (identifier or number) and return its text.
    pub fn expect_word(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEof { expected }),
            Some(token) => match token.word() {
                Some(text) => {
                    self.pos += 1;
                    Ok(text)
                }
                None => Err(ParseError::ExpectedIdentifier { position: self.pos }),
            },
        }
    }

    /// Tokens left after the cursor.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    fn eat_if(&mut self, pred: impl FnOnce(&Token) -> bool) -> bool {
        match self.peek() {
            Some(token) if pred(token) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
