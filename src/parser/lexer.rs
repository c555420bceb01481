use std::fmt;

use log::{debug, warn};

use crate::expression::Operator;
use crate::parser::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Operator(op) => write!(f, "operator '{}'", op.symbol()),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub position: usize,
}

fn operator_for(ch: char) -> Option<Operator> {
    match ch {
        '+' => Some(Operator::Add),
        '-' => Some(Operator::Subtract),
        '*' | '×' => Some(Operator::Multiply),
        '/' | '÷' => Some(Operator::Divide),
        _ => None,
    }
}

/// # Errors
///
/// Returns an error on characters outside the expression alphabet or on
/// malformed number literals.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    debug!("Tokenizing: '{}'", input);

    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = if let Some(op) = operator_for(ch) {
            chars.next();
            TokenKind::Operator(op)
        } else if ch == '(' {
            chars.next();
            TokenKind::LeftParen
        } else if ch == ')' {
            chars.next();
            TokenKind::RightParen
        } else if ch.is_ascii_digit() || ch == '.' {
            let end = number_end(input, position);
            let literal = input.get(position..end).unwrap_or_default();
            let value = literal
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(literal.to_string()))?;
            while chars.peek().is_some_and(|&(i, _)| i < end) {
                chars.next();
            }
            TokenKind::Number(value)
        } else {
            warn!("Unexpected character '{}' at position {}", ch, position);
            return Err(ParseError::UnexpectedCharacter { ch, position });
        };

        tokens.push(Token { kind, position });
    }

    debug!("Produced {} tokens", tokens.len());
    Ok(tokens)
}

/// End offset of the number literal starting at `start`: digits and dots,
/// then an optional exponent such as `e-3`.
fn number_end(input: &str, start: usize) -> usize {
    let bytes = input.as_bytes();
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }

    end
}
