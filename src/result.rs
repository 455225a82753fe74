use thiserror::Error;

/// Main error type for the values-scan library
#[derive(Error, Debug)]
pub enum ValuesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find VALUES section")]
    ValuesNotFound,
    #[error("INSERT statement not found for table: {0}")]
    TableNotFound(String),
    #[error("Unbalanced tuple opened at byte {offset} after {tuples_before} complete tuples")]
    UnbalancedTuple { offset: usize, tuples_before: usize },
    #[error("Invalid hex literal: {0}")]
    InvalidHexLiteral(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using ValuesError
pub type Result<T> = std::result::Result<T, ValuesError>;
