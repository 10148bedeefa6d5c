use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;

/// Engine defects. Any of these means the result cannot be trusted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("Node for {value} has no terms")]
    ZeroCost { value: String },
    #[error("Node for {value} with {cost} terms arrived after level {level} was drained")]
    MonotonicFront {
        value: String,
        cost: usize,
        level: usize,
    },
    #[error("Extracted from an empty frontier")]
    EmptyFrontier,
    #[error("Frontier has {live} live entries but no record points at them")]
    StaleBookkeeping { live: usize },
    #[error("Value {value} was settled twice")]
    AlreadySettled { value: String },
    #[error("Outcome requested while the search is still running")]
    StillRunning,
    #[error("Rendered goal has {rendered} terms but the goal bound is {bound}")]
    BoundMismatch { rendered: usize, bound: usize },
    #[error("Value {value} settled with {cost} terms after a node with {previous} terms")]
    SettleOrder {
        value: String,
        cost: usize,
        previous: usize,
    },
}

/// Errors that abort a search run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Search invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}
