//! Parallel evaluation of independent trees

use log::debug;
use rayon::prelude::*;

use crate::expression::Expression;

/// Evaluates every tree in parallel. Results are in input order.
pub fn evaluate_all(expressions: &[Expression]) -> Vec<f64> {
    debug!("Evaluating {} expressions in parallel", expressions.len());
    expressions.par_iter().map(Expression::evaluate).collect()
}
