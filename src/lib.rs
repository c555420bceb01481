//! Exprtree - arithmetic expression trees
//!
//! Trees are built from numeric leaves and the four binary arithmetic
//! operators. They can be evaluated, rewritten by substituting leaves with
//! other trees, and deep-copied. A small infix parser and a parallel batch
//! evaluator sit on top.

pub mod batch;
pub mod expression;
pub mod parser;

use thiserror::Error;

// Re-export the main public API
pub use batch::evaluate_all;
pub use expression::{Expression, ExpressionError, Node, Operator};
pub use parser::{ParseError, parse_expression};

/// Errors from the text-level convenience functions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Expression evaluation error: {0}")]
    Expression(#[from] ExpressionError),
}

/// Parse an infix expression and evaluate it strictly
///
/// # Arguments
///
/// * `input` - Infix arithmetic such as `"25 / (5 * (16 + -8 / 4)) - 8"`
///
/// # Errors
///
/// This function will return an error if:
/// * The input is not a well-formed expression
/// * A division has a zero divisor
/// * Any intermediate result is NaN
///
/// # Examples
///
/// ```
/// use exprtree::evaluate_str;
///
/// match evaluate_str("2 + 3") {
///     Ok(value) => assert_eq!(value, 5.0),
///     Err(e) => panic!("Error: {}", e),
/// }
/// ```
pub fn evaluate_str(input: &str) -> Result<f64, Error> {
    let expr = parse_expression(input)?;
    Ok(expr.try_evaluate()?)
}
