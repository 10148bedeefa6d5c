use log::info;
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::numeric::Scalar;
use crate::search::{SearchEngine, SearchOutcome};
use crate::solver::errors::SolverError;

/// Runs searches to completion, one engine per goal
pub struct ExpressionSolver {}

impl ExpressionSolver {
    /// Create a new expression solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find the expression with the fewest terms for `config.goal`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ConfigError` for an unusable configuration and
    /// `SolverError::SearchError` if the engine breaks an invariant.
    pub fn solve<T: Scalar>(
        &self,
        config: SearchConfig<T>,
    ) -> Result<SearchOutcome<T>, SolverError> {
        let mut engine = SearchEngine::new(config)?;
        Ok(engine.run()?)
    }

    /// Solve independent goals in parallel. Each run is single-threaded and
    /// owns its own state; results come back in input order.
    pub fn solve_many<T: Scalar>(
        &self,
        configs: Vec<SearchConfig<T>>,
    ) -> Vec<Result<SearchOutcome<T>, SolverError>> {
        info!("Solving {} goals in parallel", configs.len());
        configs
            .into_par_iter()
            .map(|config| self.solve(config))
            .collect()
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
