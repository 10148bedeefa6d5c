//! Best-first search for the cheapest expression reaching a goal

mod closed;
mod discover;
mod engine;
mod errors;
mod frontier;
mod generator;
mod node;
mod outcome;
mod state;

pub use closed::ClosedStore;
pub use engine::SearchEngine;
pub use errors::{InvariantViolation, SearchError};
pub use frontier::{Frontier, Insertion};
pub use generator::CandidateGenerator;
pub use node::{ExpressionNode, Operator};
pub use outcome::{SearchOutcome, SearchStats, SearchStatus, Solution};
pub use state::{GoalBound, SearchState};

#[cfg(test)]
mod tests;
