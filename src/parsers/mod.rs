//! Parser entry point — lex the source text, then run the program parser.

pub mod base;
pub mod program;

pub use base::Parser;
pub use program::ProgramParser;

use crate::error::ParseError;
use crate::syntax::lexer::tokenize;
use crate::syntax::types::Program;

/// Parse program text into a `Program`.
pub fn parse(src: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(src);
    log::debug!("lexed {} tokens", tokens.len());
    ProgramParser.parse(&tokens)
}
