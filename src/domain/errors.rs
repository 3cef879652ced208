use thiserror::Error;

/// Failure reported by an [`OrderStore`](super::ports::OrderStore).
///
/// `NotFound` is the only variant handlers interpret; everything else is an
/// opaque storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order not found")]
    NotFound,
    #[error("order store is closed")]
    Closed,
    #[error("corrupt order record: {0}")]
    Corrupt(String),
    #[error("storage error: {0}")]
    Internal(String),
}

/// Outcome of a request handler that did not succeed.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    NotFound(StoreError),
    #[error("{0}")]
    PermissionDenied(String),
    #[error(transparent)]
    StorageFailure(StoreError),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => OrderError::NotFound(e),
            other => OrderError::StorageFailure(other),
        }
    }
}
