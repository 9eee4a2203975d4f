use thiserror::Error;

/// Error type for ledger construction and formatting failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
