//! Search configuration supplied by the caller

pub mod constants;
mod errors;
mod operators;
mod search;
mod validation;

pub use errors::ConfigError;
pub use operators::OperatorSet;
pub use search::SearchConfig;
pub use validation::validate_config;
