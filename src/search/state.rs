use crate::numeric::Scalar;
use crate::search::closed::ClosedStore;
use crate::search::frontier::Frontier;
use crate::search::node::ExpressionNode;
use crate::search::outcome::SearchStats;

/// Best known term count for the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalBound {
    /// Candidates must cost strictly less than this to be worth keeping
    pub terms: usize,
    /// Whether `terms` comes from an actual expression for the goal
    pub found: bool,
}

impl GoalBound {
    pub fn new(initial: usize) -> Self {
        Self {
            terms: initial,
            found: false,
        }
    }

    pub fn admits(&self, cost: usize) -> bool {
        cost < self.terms
    }

    pub fn tighten(&mut self, terms: usize) {
        self.terms = terms;
        self.found = true;
    }
}

/// Everything one run mutates
#[derive(Debug)]
pub struct SearchState<T: Scalar> {
    pub(crate) closed: ClosedStore<T>,
    pub(crate) frontier: Frontier<T>,
    pub(crate) bound: GoalBound,
    pub(crate) expansions: usize,
}

impl<T: Scalar> SearchState<T> {
    pub fn new(initial_bound: usize) -> Self {
        Self {
            closed: ClosedStore::new(),
            frontier: Frontier::new(),
            bound: GoalBound::new(initial_bound),
            expansions: 0,
        }
    }

    pub fn closed(&self) -> &ClosedStore<T> {
        &self.closed
    }

    pub fn frontier(&self) -> &Frontier<T> {
        &self.frontier
    }

    pub fn bound(&self) -> GoalBound {
        self.bound
    }

    /// Settled node for `value`, or the open one if it is not settled yet
    pub fn lookup_best_known(&self, value: T) -> Option<ExpressionNode<T>> {
        lookup(&self.closed, &self.frontier, value)
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expansions: self.expansions,
            closed: self.closed.len(),
            open: self.frontier.live_count(),
            stale: self.frontier.stale_count(),
            level: self.frontier.level(),
        }
    }
}

pub(crate) fn lookup<T: Scalar>(
    closed: &ClosedStore<T>,
    frontier: &Frontier<T>,
    value: T,
) -> Option<ExpressionNode<T>> {
    closed.get(value).or_else(|| frontier.get(value)).copied()
}
