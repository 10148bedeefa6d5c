use std::collections::HashMap;

use crate::numeric::Scalar;
use crate::search::errors::InvariantViolation;
use crate::search::node::ExpressionNode;

/// Settled nodes, each holding the proven minimum term count for its value.
///
/// Append-only arena in settle order. Settling happens in non-decreasing cost
/// order, so the arena is sorted by `term_count`.
#[derive(Debug)]
pub struct ClosedStore<T: Scalar> {
    nodes: Vec<ExpressionNode<T>>,
    index: HashMap<T::Key, usize>,
}

impl<T: Scalar> ClosedStore<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// # Errors
    ///
    /// Fails if the value is already settled or if the node is cheaper than
    /// the last settled one.
    pub fn insert(&mut self, node: ExpressionNode<T>) -> Result<(), InvariantViolation> {
        if self.index.contains_key(&node.key()) {
            return Err(InvariantViolation::AlreadySettled {
                value: node.value.to_string(),
            });
        }
        if let Some(last) = self.nodes.last()
            && last.term_count > node.term_count
        {
            return Err(InvariantViolation::SettleOrder {
                value: node.value.to_string(),
                cost: node.term_count,
                previous: last.term_count,
            });
        }
        self.index.insert(node.key(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    pub fn contains(&self, value: T) -> bool {
        self.index.contains_key(&value.key())
    }

    pub fn get(&self, value: T) -> Option<&ExpressionNode<T>> {
        self.index
            .get(&value.key())
            .and_then(|&slot| self.nodes.get(slot))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpressionNode<T>> {
        self.nodes.iter()
    }

    /// Settled nodes with `term_count < limit`, in settle order
    pub fn cheaper_than(&self, limit: usize) -> &[ExpressionNode<T>] {
        let end = self.nodes.partition_point(|node| node.term_count < limit);
        self.nodes.get(..end).unwrap_or(&[])
    }
}

impl<T: Scalar> Default for ClosedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
