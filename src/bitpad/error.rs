use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BitpadError {
    #[error("Bit not found: {0}")]
    BitNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BitpadError>;
