//! Error types for SmartStudy

use thiserror::Error;

/// Result type alias for SmartStudy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in SmartStudy operations
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load or run the embedding model
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Failed to store or retrieve from vector store
    #[error("store error: {0}")]
    Store(String),

    /// The text generation backend failed or returned nothing usable
    #[error("generation error: {0}")]
    Generation(String),

    /// Failed to append to the notes file
    #[error("notes error: {0}")]
    Notes(#[from] std::io::Error),

    /// Configuration or topic file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
