use thiserror::Error;

/// Field-level failures returned by the mutating tracker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("name must not be empty")]
    EmptyName,
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("day of month must be between 1 and 31")]
    DayOutOfRange,
}

/// Error type that captures persistence failures beneath the store adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
