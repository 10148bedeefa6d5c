use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use log::debug;

use crate::numeric::Scalar;
use crate::search::errors::InvariantViolation;
use crate::search::node::ExpressionNode;

/// What `insert_or_improve` did with a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    Improved,
    Ignored,
}

/// Heap record. Ordered by cost, then by insertion sequence so equal costs
/// come out first-in first-out.
#[derive(Debug, Clone, Copy)]
struct Record<K> {
    cost: usize,
    sequence: u64,
    key: K,
}

impl<K> PartialEq for Record<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}

impl<K> Eq for Record<K> {}

impl<K> PartialOrd for Record<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Record<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.sequence).cmp(&(other.cost, other.sequence))
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot<T> {
    node: ExpressionNode<T>,
    /// Sequence of the heap record that currently speaks for this value
    sequence: u64,
}

/// Open set: discovered values whose cheapest expression is not proven yet.
///
/// `slots` is authoritative. The heap may hold several records per value;
/// only the one whose sequence matches the slot is live, the rest are stale
/// and get dropped when they surface in `extract_min`.
#[derive(Debug)]
pub struct Frontier<T: Scalar> {
    slots: HashMap<T::Key, Slot<T>>,
    heap: BinaryHeap<Reverse<Record<T::Key>>>,
    next_sequence: u64,
    /// Cost of the most recently extracted node
    level: usize,
}

impl<T: Scalar> Frontier<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            heap: BinaryHeap::new(),
            next_sequence: 0,
            level: 0,
        }
    }

    /// Add `node`, or replace the open node for its value if `node` is
    /// strictly cheaper. Otherwise the node is ignored.
    ///
    /// # Errors
    ///
    /// Fails if the node has no terms, or is not strictly more expensive than
    /// the last extracted node.
    pub fn insert_or_improve(
        &mut self,
        node: ExpressionNode<T>,
    ) -> Result<Insertion, InvariantViolation> {
        if node.term_count == 0 {
            return Err(InvariantViolation::ZeroCost {
                value: node.value.to_string(),
            });
        }
        if node.term_count <= self.level {
            return Err(InvariantViolation::MonotonicFront {
                value: node.value.to_string(),
                cost: node.term_count,
                level: self.level,
            });
        }

        let key = node.key();
        let insertion = match self.slots.get(&key) {
            None => Insertion::Added,
            Some(slot) if slot.node.term_count > node.term_count => Insertion::Improved,
            Some(_) => return Ok(Insertion::Ignored),
        };

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.slots.insert(key, Slot { node, sequence });
        self.heap.push(Reverse(Record {
            cost: node.term_count,
            sequence,
            key,
        }));
        Ok(insertion)
    }

    /// Remove and return a node of minimum cost, discarding stale records
    /// on the way.
    ///
    /// # Errors
    ///
    /// Fails on an empty frontier, or if the heap runs dry while live
    /// entries remain.
    pub fn extract_min(&mut self) -> Result<ExpressionNode<T>, InvariantViolation> {
        if self.slots.is_empty() {
            return Err(InvariantViolation::EmptyFrontier);
        }

        while let Some(Reverse(record)) = self.heap.pop() {
            let live = self
                .slots
                .get(&record.key)
                .is_some_and(|slot| slot.sequence == record.sequence);
            if !live {
                continue;
            }
            if let Some(slot) = self.slots.remove(&record.key) {
                self.level = record.cost;
                return Ok(slot.node);
            }
        }

        Err(InvariantViolation::StaleBookkeeping {
            live: self.slots.len(),
        })
    }

    /// Drop open nodes costing `bound` or more, except the one for `keep`.
    /// Their heap records turn stale. Returns the number dropped.
    pub fn evict_at_or_above(&mut self, bound: usize, keep: T) -> usize {
        let keep = keep.key();
        let before = self.slots.len();
        self.slots
            .retain(|key, slot| slot.node.term_count < bound || *key == keep);
        let evicted = before - self.slots.len();
        if evicted > 0 {
            debug!("Evicted {} open nodes at or above {} terms", evicted, bound);
        }
        evicted
    }

    pub fn contains(&self, value: T) -> bool {
        self.slots.contains_key(&value.key())
    }

    pub fn get(&self, value: T) -> Option<&ExpressionNode<T>> {
        self.slots.get(&value.key()).map(|slot| &slot.node)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Heap records, live and stale
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    pub fn stale_count(&self) -> usize {
        self.heap.len().saturating_sub(self.slots.len())
    }

    /// Cost of the most recently extracted node, 0 before the first
    pub fn level(&self) -> usize {
        self.level
    }
}

impl<T: Scalar> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
