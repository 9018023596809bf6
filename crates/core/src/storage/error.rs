use thiserror::Error;

/// Errors that can occur when talking to the member store.
///
/// `Timeout` and `NetworkUnreachable` are transient and may be retried;
/// every other variant is surfaced to the caller as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Request timed out after {0}ms")]
    Timeout(u64),
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),
    #[error("Backend returned {content_type} instead of JSON (status {status}); the server may be down or the endpoint misconfigured")]
    BackendMisconfigured { status: u16, content_type: String },
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid data: {0}")]
    Validation(String),
    #[error("Member not found: {0}")]
    NotFound(String),
    #[error("Member ID not found for update")]
    IdentifierMissing,
    #[error("Backend returned status {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl StoreError {
    /// Returns true for failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreError::Timeout(_) | StoreError::NetworkUnreachable(_)
        )
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
