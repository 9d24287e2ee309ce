//! Error types for share-offer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareOfferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to persist state file: {0}")]
    Persist(String),
}

impl From<tempfile::PersistError> for ShareOfferError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Persist(err.error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShareOfferError>;
