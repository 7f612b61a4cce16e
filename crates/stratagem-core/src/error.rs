use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    // Message is surfaced verbatim to the user, no prefix.
    #[error("{0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
