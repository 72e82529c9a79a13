use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum KeepsakeError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Invalid transition: cannot {action} a record in state {status}")]
    InvalidTransition { status: String, action: String },

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, KeepsakeError>;
