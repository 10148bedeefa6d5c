use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::numeric::Scalar;
use crate::render::symbol;
use crate::search::Operator;

impl<T: Scalar> Expression<T> {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - A division with no result in the domain (inexact integer division)
    /// - An operation whose result overflows or is not finite
    pub fn evaluate(&self) -> Result<T, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => apply(Operator::Add, l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => apply(Operator::Sub, l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => apply(Operator::Mul, l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right.is_zero() {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    left.try_div(right)
                        .ok_or_else(|| ExpressionError::InvalidDivision {
                            left: left.to_string(),
                            right: right.to_string(),
                        })
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}

fn apply<T: Scalar>(op: Operator, left: T, right: T) -> Result<T, ExpressionError> {
    op.apply(left, right).ok_or_else(|| ExpressionError::Overflow {
        left: left.to_string(),
        op: symbol(op),
        right: right.to_string(),
    })
}
