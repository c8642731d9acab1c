use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("No participants available after resolution")]
    EmptyInput,

    #[error("Unknown group id: {id}")]
    UnknownGroup { id: u32 },

    #[error("Index {index} out of bounds for group {group} (size {size})")]
    InvalidIndex { group: u32, index: usize, size: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroupError>;
