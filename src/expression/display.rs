use std::fmt;

use crate::expression::ast::Expression;
use crate::numeric::Scalar;

impl<T: Scalar> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence<T>(expr: &Expression<T>) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Number(_) => 3,
            }
        }

        fn leading_is_unary_minus<T: Scalar>(expr: &Expression<T>) -> bool {
            match expr {
                Expression::Number(n) => n.to_string().starts_with('-'),
                Expression::Add(l, _)
                | Expression::Sub(l, _)
                | Expression::Mul(l, _)
                | Expression::Div(l, _) => leading_is_unary_minus(l),
            }
        }

        fn write_with_parens<T: Scalar>(
            f: &mut fmt::Formatter,
            expr: &Expression<T>,
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

        fn write_binary<T: Scalar>(
            f: &mut fmt::Formatter,
            l: &Expression<T>,
            symbol: &str,
            r: &Expression<T>,
            need_l: bool,
            need_r: bool,
        ) -> fmt::Result {
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            // A negative right operand always gets parentheses: `1 - (-2)`
            write_with_parens(f, r, need_r || leading_is_unary_minus(r))
        }

        fn fmt_expression<T: Scalar>(f: &mut fmt::Formatter, expr: &Expression<T>) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, "+", r, false, false),
                Expression::Sub(l, r) => {
                    let need_r = precedence(r) <= 1;
                    write_binary(f, l, "-", r, false, need_r)
                }
                Expression::Mul(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) < 2;
                    write_binary(f, l, "*", r, need_l, need_r)
                }
                Expression::Div(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) <= 2;
                    write_binary(f, l, "/", r, need_l, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
