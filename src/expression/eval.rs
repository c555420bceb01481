use log::debug;

use crate::expression::ast::{Expression, Node, Operator};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Computes the value of the tree with IEEE-754 semantics.
    ///
    /// Never fails: a nonzero value divided by zero gives a signed infinity
    /// and `0 / 0` gives NaN. Use [`Expression::try_evaluate`] to reject those.
    pub fn evaluate(&self) -> f64 {
        match self.node() {
            Node::Leaf(n) => n,
            Node::Binary(op, l, r) => op.apply(l.evaluate(), r.evaluate()),
        }
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - The right operand of a division evaluates to exactly zero
    /// - Any leaf or intermediate result is NaN
    pub fn try_evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = self.strict_value();

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn strict_value(&self) -> Result<f64, ExpressionError> {
        let value = match self.node() {
            Node::Leaf(n) => n,
            Node::Binary(op, l, r) => {
                let left = l.strict_value()?;
                let right = r.strict_value()?;
                if op == Operator::Divide && right == 0.0 {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    return Err(ExpressionError::DivisionByZero);
                }
                op.apply(left, right)
            }
        };

        if value.is_nan() {
            debug!("NaN produced by: {}", self);
            Err(ExpressionError::NotANumber)
        } else {
            Ok(value)
        }
    }
}
