//! Infix text to expression trees

pub mod constants;
mod errors;
mod grammar;
mod lexer;

pub use errors::ParseError;

use log::{debug, warn};

use crate::expression::Expression;

/// Parses infix arithmetic such as `25 / (5 * (16 + -8 / 4)) - 8`.
///
/// `×` and `÷` are accepted alongside `*` and `/`. Operators are
/// left-associative and `*`/`/` bind tighter than `+`/`-`.
///
/// # Errors
///
/// Returns an error if the input is blank, contains characters outside the
/// expression alphabet, or is not a single well-formed expression.
pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", input);

    if input.trim().is_empty() {
        warn!("Expression is empty");
        return Err(ParseError::EmptyInput);
    }

    let tokens = lexer::tokenize(input)?;
    let result = grammar::Parser::new(&tokens).parse();

    match &result {
        Ok(expr) => debug!("Parsed expression: {}", expr),
        Err(e) => warn!("Failed to parse '{}': {}", input, e),
    }

    result
}

#[cfg(test)]
mod tests;
