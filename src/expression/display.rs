use std::fmt;

use crate::expression::ast::{Expression, Node};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr.operator() {
                Some(op) => op.precedence(),
                None => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            let (op, l, r) = match expr.node() {
                Node::Leaf(n) => return write!(f, "{}", n),
                Node::Binary(op, l, r) => (op, l, r),
            };

            // Operators are left-associative, so a right operand of equal
            // precedence keeps its parentheses.
            let own = op.precedence();
            write_with_parens(f, l, precedence(l) < own)?;
            write!(f, " {} ", op.symbol())?;
            write_with_parens(f, r, precedence(r) <= own)
        }

        fmt_expression(f, self)
    }
}
