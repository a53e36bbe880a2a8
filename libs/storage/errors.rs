use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't parse store document: {0}")]
    CorruptedDocument(String),
    #[error("store operation failed: {0}")]
    OperationFailed(String),
}

impl StoreError {
    pub fn corrupted_document<E: std::fmt::Display>(error: E) -> Self {
        StoreError::CorruptedDocument(error.to_string())
    }

    pub fn operation_failed<E: std::fmt::Display>(error: E) -> Self {
        StoreError::OperationFailed(error.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
