use crate::config::OperatorSet;
use crate::numeric::Scalar;
use crate::search::node::{ExpressionNode, Operator};

/// Combines two settled nodes into new candidates
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator {
    operators: OperatorSet,
}

impl CandidateGenerator {
    pub fn new(operators: OperatorSet) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> OperatorSet {
        self.operators
    }

    /// Hand every candidate `a op b` to `sink` as soon as it is built.
    ///
    /// When `a` and `b` differ, the non-commutative operators are applied
    /// to `b op a` too. Undefined results (inexact or zero division,
    /// overflow) produce no candidate.
    pub fn generate<T, E, F>(
        &self,
        a: &ExpressionNode<T>,
        b: &ExpressionNode<T>,
        mut sink: F,
    ) -> Result<(), E>
    where
        T: Scalar,
        F: FnMut(ExpressionNode<T>) -> Result<(), E>,
    {
        const ORDER: [Operator; 4] = [Operator::Div, Operator::Sub, Operator::Mul, Operator::Add];

        for op in ORDER {
            self.emit(op, a, b, &mut sink)?;
        }

        if a.key() != b.key() {
            for op in ORDER.into_iter().filter(|op| !op.is_commutative()) {
                self.emit(op, b, a, &mut sink)?;
            }
        }
        Ok(())
    }

    fn emit<T, E, F>(
        &self,
        op: Operator,
        left: &ExpressionNode<T>,
        right: &ExpressionNode<T>,
        sink: &mut F,
    ) -> Result<(), E>
    where
        T: Scalar,
        F: FnMut(ExpressionNode<T>) -> Result<(), E>,
    {
        if !self.operators.contains(op) {
            return Ok(());
        }
        match ExpressionNode::combine(op, left, right) {
            Some(candidate) => sink(candidate),
            None => Ok(()),
        }
    }

    /// Collect the candidates of `generate` into a vector
    pub fn candidates<T: Scalar>(
        &self,
        a: &ExpressionNode<T>,
        b: &ExpressionNode<T>,
    ) -> Vec<ExpressionNode<T>> {
        let mut out = Vec::with_capacity(6);
        let collected: Result<(), std::convert::Infallible> = self.generate(a, b, |candidate| {
            out.push(candidate);
            Ok(())
        });
        match collected {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(OperatorSet::ALL)
    }
}
