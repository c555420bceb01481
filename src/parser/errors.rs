use thiserror::Error;

/// Errors that can occur while parsing infix expressions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression cannot be empty")]
    EmptyInput,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("Unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Expression nests deeper than {limit} levels at position {position}")]
    TooDeep { limit: usize, position: usize },
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}
