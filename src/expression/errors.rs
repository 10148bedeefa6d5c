use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division {left} / {right} has no result in this domain")]
    InvalidDivision { left: String, right: String },
    #[error("Result of {left} {op} {right} is out of range")]
    Overflow {
        left: String,
        op: char,
        right: String,
    },
}
