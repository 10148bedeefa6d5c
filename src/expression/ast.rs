use crate::search::Operator;

/// An arithmetic expression over numbers of one domain
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<T> {
    Number(T),
    Add(Box<Expression<T>>, Box<Expression<T>>),
    Sub(Box<Expression<T>>, Box<Expression<T>>),
    Mul(Box<Expression<T>>, Box<Expression<T>>),
    Div(Box<Expression<T>>, Box<Expression<T>>),
}

impl<T> Expression<T> {
    pub fn binary(op: Operator, left: Expression<T>, right: Expression<T>) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Number of leaves
    pub fn term_count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => l.term_count() + r.term_count(),
        }
    }
}
