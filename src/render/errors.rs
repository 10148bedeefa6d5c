use thiserror::Error;

/// Failures while rebuilding an expression from the stores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("No node known for value {0}")]
    UnknownValue(String),
    #[error("Node for {value} has {expected} terms but its operands have {found}")]
    InconsistentCost {
        value: String,
        expected: usize,
        found: usize,
    },
    #[error("Token stream is not a single well-formed expression")]
    MalformedRpn,
}
