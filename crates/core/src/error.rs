use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
