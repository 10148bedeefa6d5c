use crate::config::constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOLERANCE};
use crate::config::operators::OperatorSet;
use crate::numeric::{MagnitudeBand, Scalar};

/// Everything one search run needs: leaves, goal and pruning rules
#[derive(Debug, Clone)]
pub struct SearchConfig<T> {
    /// Leaf values, each costing one term
    pub seeds: Vec<T>,
    pub goal: T,
    /// Values whose magnitude falls outside this band are never explored
    pub band: MagnitudeBand<T>,
    pub operators: OperatorSet,
    /// Goal matching tolerance; only consulted in the real domain
    pub tolerance: f64,
    /// Largest term count worth exploring, `None` for no limit
    pub term_limit: Option<usize>,
    /// Expansions before the first progress line; later lines are spaced
    /// geometrically
    pub progress_interval: usize,
}

impl<T: Scalar> SearchConfig<T> {
    pub fn new(seeds: Vec<T>, goal: T) -> Self {
        Self {
            seeds,
            goal,
            band: MagnitudeBand::unbounded(),
            operators: OperatorSet::ALL,
            tolerance: DEFAULT_TOLERANCE,
            term_limit: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_band(mut self, band: MagnitudeBand<T>) -> Self {
        self.band = band;
        self
    }

    #[must_use]
    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_term_limit(mut self, term_limit: usize) -> Self {
        self.term_limit = Some(term_limit);
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Initial value of the goal bound: strictly above any acceptable cost
    pub(crate) fn initial_bound(&self) -> usize {
        self.term_limit
            .map_or(usize::MAX, |limit| limit.saturating_add(1))
    }
}
