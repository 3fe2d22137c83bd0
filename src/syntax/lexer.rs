//! Lexer — splits source text into parentheses and words.
//!
//! The lexer never fails: any character that is not whitespace or a
//! parenthesis simply becomes part of the surrounding word.

use super::token::Token;

/// Whitespace recognised by the lexer: space, tab, newline, carriage return,
/// vertical tab and form feed.
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn is_delimiter(ch: char) -> bool {
    is_whitespace(ch) || ch == '(' || ch == ')'
}

/// Tokenize `src` into a flat, left-to-right token stream.
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if is_whitespace(ch) {
            chars.next();
            continue;
        }
        match ch {
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            _ => {
                let mut end = start;
                while let Some(&(idx, c)) = chars.peek() {
                    if is_delimiter(c) {
                        break;
                    }
                    end = idx + c.len_utf8();
                    chars.next();
                }
                tokens.push(word_token(&src[start..end]));
            }
        }
    }

    tokens
}

fn word_token(word: &str) -> Token {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        Token::Number(word.to_string())
    } else {
        Token::Identifier(word.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_lexer.rs"]
mod tests;
