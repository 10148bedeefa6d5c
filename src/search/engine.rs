use log::{debug, info, warn};

use crate::config::{SearchConfig, validate_config};
use crate::numeric::Scalar;
use crate::render;
use crate::search::closed::ClosedStore;
use crate::search::discover::Discovery;
use crate::search::errors::{InvariantViolation, SearchError};
use crate::search::generator::CandidateGenerator;
use crate::search::node::ExpressionNode;
use crate::search::outcome::{SearchOutcome, SearchStatus, Solution};
use crate::search::state::SearchState;

/// Uniform-cost search over expressions, one instance per run.
///
/// Each `step` settles the cheapest open node and combines it with the
/// settled nodes. The run stops once the cheapest possible new candidate,
/// `popped + 1` terms, can no longer beat the best goal expression. This
/// relies on every seed costing one term.
#[derive(Debug)]
pub struct SearchEngine<T: Scalar> {
    config: SearchConfig<T>,
    generator: CandidateGenerator,
    state: SearchState<T>,
    status: SearchStatus,
    next_progress: usize,
}

impl<T: Scalar> SearchEngine<T> {
    /// Validate the configuration and seed the frontier with its leaves.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Config` for an unusable configuration.
    pub fn new(config: SearchConfig<T>) -> Result<Self, SearchError> {
        validate_config(&config)?;

        let mut engine = Self {
            generator: CandidateGenerator::new(config.operators),
            state: SearchState::new(config.initial_bound()),
            status: SearchStatus::Running,
            next_progress: config.progress_interval.max(1),
            config,
        };
        info!(
            "Searching for {} from {} seeds ({} domain, operators {})",
            engine.config.goal,
            engine.config.seeds.len(),
            T::DOMAIN,
            engine.generator.operators()
        );
        engine.seed()?;
        Ok(engine)
    }

    fn seed(&mut self) -> Result<(), SearchError> {
        let SearchState {
            closed,
            frontier,
            bound,
            ..
        } = &mut self.state;
        let mut discovery = Discovery {
            closed,
            frontier,
            bound,
            config: &self.config,
        };
        for &seed in &self.config.seeds {
            discovery.provide(seed)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Settle one node. Calling `step` after the run finished is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a `SearchError` when an engine invariant breaks; the run is
    /// then unusable.
    pub fn step(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status != SearchStatus::Running {
            return Ok(self.status);
        }

        if self.state.frontier.is_empty() {
            self.status = if self.state.bound.found {
                SearchStatus::Succeeded
            } else {
                SearchStatus::Failed
            };
            return Ok(self.status);
        }

        let previous_level = self.state.frontier.level();
        let node = self.state.frontier.extract_min()?;
        if node.term_count > previous_level {
            info!(
                "Now at level {} ({} open, {} stale, {} closed)",
                node.term_count,
                self.state.frontier.live_count(),
                self.state.frontier.stale_count(),
                self.state.closed.len()
            );
        }

        self.state.expansions += 1;
        if self.state.expansions == self.next_progress {
            info!(
                "Expanding {} at depth {}, {} open ({} stale), {} closed",
                node.value,
                node.term_count,
                self.state.frontier.live_count(),
                self.state.frontier.stale_count(),
                self.state.closed.len()
            );
            self.next_progress = next_progress_mark(self.next_progress);
        }

        // Settled first so the node is combined with itself too
        self.state.closed.insert(node)?;

        if self.state.bound.terms <= node.term_count + 1 {
            self.status = if self.state.bound.found {
                SearchStatus::Succeeded
            } else {
                SearchStatus::Failed
            };
            debug!(
                "Stopping at level {}: goal bound is {}",
                node.term_count, self.state.bound.terms
            );
            return Ok(self.status);
        }

        self.expand(node)?;
        Ok(self.status)
    }

    fn expand(&mut self, node: ExpressionNode<T>) -> Result<(), SearchError> {
        let SearchState {
            closed,
            frontier,
            bound,
            ..
        } = &mut self.state;
        let closed: &ClosedStore<T> = closed;

        // Peers at or above this cost cannot form a candidate under the bound
        let peer_limit = bound.terms.saturating_sub(node.term_count);
        let peers = closed.cheaper_than(peer_limit);

        let mut discovery = Discovery {
            closed,
            frontier,
            bound,
            config: &self.config,
        };
        for peer in peers {
            self.generator
                .generate(&node, peer, |candidate| discovery.offer(candidate))?;
        }
        Ok(())
    }

    /// Step until the run succeeds or fails.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from `step` and rendering failures.
    pub fn run(&mut self) -> Result<SearchOutcome<T>, SearchError> {
        while self.step()? == SearchStatus::Running {}
        self.outcome()
    }

    /// The result of a finished run.
    ///
    /// # Errors
    ///
    /// Fails if the run has not finished, or if the goal expression cannot be
    /// rebuilt from the stores.
    pub fn outcome(&self) -> Result<SearchOutcome<T>, SearchError> {
        let goal = self.config.goal;
        let stats = self.state.stats();
        match self.status {
            SearchStatus::Running => Err(InvariantViolation::StillRunning.into()),
            SearchStatus::Failed => {
                warn!(
                    "Goal {} unreachable under the current configuration",
                    goal
                );
                Ok(SearchOutcome::Unreachable { goal, stats })
            }
            SearchStatus::Succeeded => {
                let rendering =
                    render::render(goal, |value| self.state.lookup_best_known(value))?;
                if rendering.term_count != self.state.bound.terms {
                    return Err(InvariantViolation::BoundMismatch {
                        rendered: rendering.term_count,
                        bound: self.state.bound.terms,
                    }
                    .into());
                }
                info!(
                    "Done after {} steps: {} terms build {} = {}",
                    stats.expansions, rendering.term_count, goal, rendering.infix
                );
                Ok(SearchOutcome::Success(Solution {
                    goal,
                    term_count: rendering.term_count,
                    infix: rendering.infix,
                    rpn: rendering.rpn,
                    expression: rendering.expression,
                    stats,
                }))
            }
        }
    }
}

/// Expansion count of the next progress line; grows by half each time.
pub(crate) fn next_progress_mark(current: usize) -> usize {
    (current.saturating_mul(3) / 2).max(current.saturating_add(1))
}
