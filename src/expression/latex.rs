use crate::expression::ast::Expression;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, which makes grouping explicit
    /// - Wraps negative literals that follow an operator
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Subtract(_, _) => 1,
                Expression::Multiply(_, _) => 2,
                Expression::Divide(_, _) | Expression::Number(_) => 3,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn is_negative_literal(expr: &Expression) -> bool {
            matches!(expr, Expression::Number(n) if n.is_sign_negative() && *n != 0.0)
        }

        fn fmt_operands(
            l: &Expression,
            r: &Expression,
            own: u8,
            strict_right: bool,
        ) -> (String, String) {
            let mut ls = fmt(l);
            let mut rs = fmt(r);
            if precedence(l) < own {
                ls = wrap_parens(ls);
            }
            let rp = precedence(r);
            if rp < own || (strict_right && rp == own) || is_negative_literal(r) {
                rs = wrap_parens(rs);
            }
            (ls, rs)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Number(n) => number_to_string(*n),
                Expression::Add(l, r) => {
                    let (ls, rs) = fmt_operands(l, r, 1, false);
                    format!("{} + {}", ls, rs)
                }
                Expression::Subtract(l, r) => {
                    let (ls, rs) = fmt_operands(l, r, 1, true);
                    format!("{} - {}", ls, rs)
                }
                Expression::Multiply(l, r) => {
                    let (ls, rs) = fmt_operands(l, r, 2, false);
                    format!("{} \\cdot {}", ls, rs)
                }
                Expression::Divide(l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r))
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            if n == 0.0 && n.is_sign_negative() {
                String::from("-0")
            } else if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e18 {
                format!("{}", n.trunc() as i64)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
