//! Leastterms - find the cheapest arithmetic expression for a goal value
//!
//! Given a few seed numbers and a goal, this library searches for an
//! expression over `+ - * /` and those seeds that evaluates to the goal using
//! the fewest leaf terms. The search is a uniform-cost search over values:
//! every value keeps only its cheapest known expression, and values are
//! settled in order of term count.

pub mod config;
pub mod expression;
pub mod numeric;
pub mod render;
pub mod search;
pub mod solver;

// Re-export the main public API
pub use config::{ConfigError, OperatorSet, SearchConfig};
pub use expression::{Expression, ExpressionError};
pub use numeric::{MagnitudeBand, NumericDomain, Scalar};
pub use render::{RenderError, Token};
pub use search::{
    ExpressionNode, InvariantViolation, Operator, SearchEngine, SearchError, SearchOutcome,
    SearchStats, SearchStatus, Solution,
};
pub use solver::{ExpressionSolver, SolverError};

/// Find the integer expression over `seeds` with the fewest terms that
/// evaluates to `goal`
///
/// Intermediate values must stay strictly below `max` in magnitude.
///
/// # Arguments
///
/// * `seeds` - Leaf values, each usable any number of times
/// * `goal` - The target value to build
/// * `max` - Exclusive bound on the magnitude of any intermediate value
///
/// # Returns
///
/// * `Ok(SearchOutcome::Success(_))` - The cheapest expression and its term count
/// * `Ok(SearchOutcome::Unreachable { .. })` - No expression exists within the band
/// * `Err(SolverError)` - The input was invalid or the engine failed
///
/// # Errors
///
/// This function will return an error if:
/// * `seeds` is empty
/// * The engine breaks one of its internal invariants
///
/// # Examples
///
/// ```
/// use leastterms::find_minimal_expression;
///
/// match find_minimal_expression(&[3, 4], 19, 1000) {
///     Ok(outcome) => match outcome.solution() {
///         Some(solution) => println!("{} terms: {}", solution.term_count, solution.infix),
///         None => println!("Unreachable"),
///     },
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_minimal_expression(
    seeds: &[i64],
    goal: i64,
    max: i64,
) -> Result<SearchOutcome<i64>, SolverError> {
    let config = SearchConfig::new(seeds.to_vec(), goal).with_band(MagnitudeBand::below(max));
    ExpressionSolver::new().solve(config)
}
