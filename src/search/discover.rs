use log::{Level, debug, info, log_enabled};

use crate::config::SearchConfig;
use crate::numeric::Scalar;
use crate::render;
use crate::search::closed::ClosedStore;
use crate::search::errors::SearchError;
use crate::search::frontier::Frontier;
use crate::search::node::ExpressionNode;
use crate::search::state::{GoalBound, lookup};

/// Filter between the generator and the frontier.
///
/// Borrows the stores separately so candidates can be offered while the
/// closed store is being iterated.
pub(crate) struct Discovery<'a, T: Scalar> {
    pub closed: &'a ClosedStore<T>,
    pub frontier: &'a mut Frontier<T>,
    pub bound: &'a mut GoalBound,
    pub config: &'a SearchConfig<T>,
}

impl<T: Scalar> Discovery<'_, T> {
    /// Seed a leaf. Seeds skip the magnitude band.
    pub fn provide(&mut self, value: T) -> Result<(), SearchError> {
        debug!("Providing seed {}", value);
        self.admit(ExpressionNode::leaf(value))
    }

    /// Keep a generated candidate if it is unsettled, inside the band and
    /// cheaper than the best known goal expression.
    pub fn offer(&mut self, candidate: ExpressionNode<T>) -> Result<(), SearchError> {
        if self.closed.contains(candidate.value) {
            return Ok(());
        }
        if !self.config.band.contains(candidate.value) {
            return Ok(());
        }
        if !self.bound.admits(candidate.term_count) {
            return Ok(());
        }
        self.admit(candidate)
    }

    fn admit(&mut self, mut candidate: ExpressionNode<T>) -> Result<(), SearchError> {
        let goal = self.config.goal;
        let hits_goal = candidate.value.within(goal, self.config.tolerance);
        if hits_goal {
            candidate.value = goal;
        }
        if !self.bound.admits(candidate.term_count) || self.closed.contains(candidate.value) {
            return Ok(());
        }

        self.frontier.insert_or_improve(candidate)?;

        if hits_goal {
            self.bound.tighten(candidate.term_count);
            self.frontier
                .evict_at_or_above(candidate.term_count, goal);
            if log_enabled!(Level::Info) {
                let closed = self.closed;
                let frontier = &*self.frontier;
                let witness = render::infix(goal, |value| lookup(closed, frontier, value))?;
                info!(
                    "One way ({} terms): {} = {}",
                    candidate.term_count, goal, witness
                );
            }
        }
        Ok(())
    }
}
