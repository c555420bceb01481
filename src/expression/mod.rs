//! Expression trees: construction, evaluation, substitution and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod latex;
mod rewrite;

pub use ast::{Expression, Node, Operator};
pub use errors::ExpressionError;
