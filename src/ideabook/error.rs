use thiserror::Error;
use uuid::Uuid;

/// Raw failures surfaced by a store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Idea not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The failure taxonomy presenters see. Every store failure normalizes to
/// exactly one of these two kinds.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Idea not found: {0}")]
    NotFound(Uuid),

    #[error("The change could not be saved: {0}")]
    Persistence(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Persistence(other),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
