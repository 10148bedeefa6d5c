use crate::expression::Expression;
use crate::render::{Token, format_rpn};

/// Where the engine's state machine stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Succeeded,
    Failed,
}

/// Counters describing a run, for progress output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub expansions: usize,
    pub closed: usize,
    pub open: usize,
    /// Superseded or evicted heap records not yet discarded
    pub stale: usize,
    pub level: usize,
}

/// A cheapest expression for the goal
#[derive(Debug, Clone)]
pub struct Solution<T> {
    pub goal: T,
    pub term_count: usize,
    /// Fully parenthesized, e.g. `((42+42)/42)`
    pub infix: String,
    pub rpn: Vec<Token<T>>,
    pub expression: Expression<T>,
    pub stats: SearchStats,
}

impl<T: std::fmt::Display> Solution<T> {
    pub fn rpn_string(&self) -> String {
        format_rpn(&self.rpn)
    }
}

#[derive(Debug, Clone)]
pub enum SearchOutcome<T> {
    Success(Solution<T>),
    /// The frontier ran dry, or the term limit was reached, without
    /// producing the goal
    Unreachable { goal: T, stats: SearchStats },
}

impl<T> SearchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success(_))
    }

    pub fn solution(&self) -> Option<&Solution<T>> {
        match self {
            SearchOutcome::Success(solution) => Some(solution),
            SearchOutcome::Unreachable { .. } => None,
        }
    }

    pub fn term_count(&self) -> Option<usize> {
        self.solution().map(|solution| solution.term_count)
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Success(solution) => solution.stats,
            SearchOutcome::Unreachable { stats, .. } => *stats,
        }
    }
}
