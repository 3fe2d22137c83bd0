//! Syntax layer: tokens, the lexer, and the expression arena the parser fills.

pub mod lexer;
pub mod token;
pub mod types;

pub use lexer::tokenize;
pub use token::Token;
pub use types::{BindingTable, Expr, ExprArena, ExprId, PrimitiveKind, Program};
