use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Any network, transport, or remote-status failure. The store does not
    /// distinguish 4xx from 5xx or timeouts from refused connections.
    #[error("remote operation failed: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
