//! Recursive descent parser for programs: `(define name expr)* expr`.
//!
//! Bindings are threaded through the parse as an explicit `BindingTable`
//! value. A name resolves only against definitions that precede it, so a
//! body cannot reach its own name and the expression graph stays acyclic.

use log::{debug, warn};

use crate::error::ParseError;
use crate::syntax::token::Token;
use crate::syntax::types::{BindingTable, Expr, ExprArena, ExprId, PrimitiveKind, Program};

use super::base::{Parser, TokenCursor};

/// Deepest call nesting the parser will descend into.
pub const MAX_NESTING: usize = 512;

const DEFINE: &str = "define";

/// Parser for the define-then-expression program grammar.
pub struct ProgramParser;

impl Parser for ProgramParser {
    fn parse(&self, tokens: &[Token]) -> Result<Program, ParseError> {
        let mut state = ParseState {
            cursor: TokenCursor::new(tokens),
            arena: ExprArena::new(),
        };
        let mut bindings = BindingTable::new();

        while state.try_parse_define(&mut bindings)? {}
        let root = state.parse_expr(&bindings, 0)?;

        if !state.cursor.eof() {
            debug!(
                "ignoring {} trailing token(s) after the program expression",
                state.cursor.remaining()
            );
        }
        debug!(
            "parsed {} expressions with {} binding(s)",
            state.arena.len(),
            bindings.len()
        );

        Ok(Program {
            arena: state.arena,
            bindings,
            root,
        })
    }
}

struct ParseState<'a> {
    cursor: TokenCursor<'a>,
    arena: ExprArena,
}

impl ParseState<'_> {
    /// Match one `(define name expr)` form. Returns `Ok(false)` with the
    /// cursor untouched when the next tokens do not start a define.
    fn try_parse_define(&mut self, bindings: &mut BindingTable) -> Result<bool, ParseError> {
        let saved = self.cursor.pos;
        if !(self.cursor.eat_open() && self.cursor.eat_keyword(DEFINE)) {
            self.cursor.pos = saved;
            return Ok(false);
        }

        let name = self.cursor.expect_word("a name after 'define'")?;
        let body = self.parse_expr(bindings, 1)?;
        if !self.cursor.eat_close() {
            return Err(ParseError::UnclosedDefine {
                name: name.to_string(),
            });
        }

        if bindings.lookup(name).is_some() {
            warn!("'{name}' is already defined; keeping the first definition");
            return Ok(true);
        }
        let variable = self.arena.alloc(Expr::Variable {
            label: name.to_string(),
            bound: body,
        });
        bindings.bind(name, variable);
        Ok(true)
    }

    fn parse_expr(&mut self, bindings: &BindingTable, depth: usize) -> Result<ExprId, ParseError> {
        if depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }

        let position = self.cursor.pos;
        let Some(token) = self.cursor.bump() else {
            return Err(ParseError::UnexpectedEof {
                expected: "an expression",
            });
        };
        match token {
            Token::CloseParen => Err(ParseError::UnexpectedCloseParen { position }),
            Token::OpenParen => self.parse_call(bindings, depth),
            Token::Identifier(text) | Token::Number(text) => {
                if let Some(variable) = bindings.lookup(text) {
                    return Ok(variable);
                }
                let kind = if token.is_number() {
                    PrimitiveKind::Number
                } else {
                    PrimitiveKind::Symbol
                };
                Ok(self.arena.alloc(Expr::Primitive {
                    label: text.clone(),
                    kind,
                }))
            }
        }
    }

    /// Parse the rest of a call after its `(`.
    fn parse_call(&mut self, bindings: &BindingTable, depth: usize) -> Result<ExprId, ParseError> {
        let label = self.cursor.expect_word("a call label")?;
        let mut args = Vec::new();
        loop {
            match self.cursor.peek() {
                Some(Token::CloseParen) => {
                    self.cursor.bump();
                    break;
                }
                None => {
                    return Err(ParseError::UnclosedCall {
                        label: label.to_string(),
                    });
                }
                Some(_) => args.push(self.parse_expr(bindings, depth + 1)?),
            }
        }
        Ok(self.arena.alloc(Expr::Call {
            label: label.to_string(),
            args,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_program.rs"]
mod tests;
