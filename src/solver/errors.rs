use thiserror::Error;

use crate::config::ConfigError;
use crate::search::SearchError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Search error: {0}")]
    SearchError(SearchError),
}

// The engine validates its own configuration
impl From<SearchError> for SolverError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Config(err) => SolverError::ConfigError(err),
            other => SolverError::SearchError(other),
        }
    }
}
