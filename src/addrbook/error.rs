use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, BookError>;
