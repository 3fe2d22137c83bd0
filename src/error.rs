//! Error types for parsing and layout.
//!
//! Every `ParseError` variant means the same thing to a caller: the text has
//! no result and nothing partial was produced. The variants only exist so a
//! caller can say *why*.

use thiserror::Error;

/// Reasons a program text fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected an identifier at token {position}")]
    ExpectedIdentifier { position: usize },

    #[error("unexpected ')' at token {position}")]
    UnexpectedCloseParen { position: usize },

    #[error("definition of '{name}' is missing its closing ')'")]
    UnclosedDefine { name: String },

    #[error("call to '{label}' is missing its closing ')'")]
    UnclosedCall { label: String },

    #[error("expressions nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Reasons a parsed program cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("expression '{label}' refers back to itself")]
    CyclicExpression { label: String },

    #[error("node graph contains a cycle")]
    NotADag,
}

/// Crate-level error returned by `convert` and `render_source`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
