use stratagem_core::error::CoreError;
use thiserror::Error;

/// Failures of a single invocation. Every variant renders to the exact
/// string the user sees in the tri-state; nothing here is fatal and
/// nothing is retried.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-2xx response. `detail` is the server's detail field when the
    /// body carried one, else a generic status line.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("{0}")]
    Transport(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
