use thiserror::Error;

/// Errors reported by strict evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Operand is not a number")]
    NotANumber,
}
