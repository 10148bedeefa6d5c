use crate::numeric::Scalar;

/// One of the four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Apply under the domain's checked arithmetic
    pub fn apply<T: Scalar>(self, left: T, right: T) -> Option<T> {
        match self {
            Operator::Add => left.try_add(right),
            Operator::Sub => left.try_sub(right),
            Operator::Mul => left.try_mul(right),
            Operator::Div => left.try_div(right),
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

/// A candidate expression, identified by the value it evaluates to.
///
/// Children are referenced by value, not by pointer: several nodes may share
/// one sub-value, so the expressions form a DAG over the value-keyed stores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressionNode<T> {
    pub value: T,
    pub left: T,
    pub right: T,
    /// Number of leaf terms; the search cost
    pub term_count: usize,
    /// `None` marks a leaf
    pub op: Option<Operator>,
}

impl<T: Scalar> ExpressionNode<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: value,
            right: value,
            term_count: 1,
            op: None,
        }
    }

    /// `left op right`, or `None` when the operator is undefined for these
    /// operands in the active domain
    pub fn combine(op: Operator, left: &Self, right: &Self) -> Option<Self> {
        let value = op.apply(left.value, right.value)?;
        Some(Self {
            value,
            left: left.value,
            right: right.value,
            term_count: left.term_count + right.term_count,
            op: Some(op),
        })
    }

    #[inline]
    pub fn key(&self) -> T::Key {
        self.value.key()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }
}
