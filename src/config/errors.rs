use thiserror::Error;

/// Problems with a configuration, found before the search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("At least one seed value is required")]
    NoSeeds,
    #[error("Seed value is not finite: {0}")]
    NonFiniteSeed(String),
    #[error("Goal value is not finite: {0}")]
    NonFiniteGoal(String),
    #[error("Magnitude band is empty: min={min}, max={max}")]
    EmptyBand { min: String, max: String },
    #[error("Tolerance must be finite and non-negative: {0}")]
    InvalidTolerance(f64),
    #[error("Operator set cannot be empty")]
    NoOperators,
    #[error("Unknown operator symbol: '{0}'")]
    UnknownOperator(char),
    #[error("Term limit must be at least 1")]
    ZeroTermLimit,
    #[error("A real-valued search needs a maximum magnitude or a term limit")]
    UnboundedRealSearch,
}
