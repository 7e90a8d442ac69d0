use thiserror::Error;

#[derive(Debug, Error)]
pub enum TherafindError {
    #[error("Invalid API base URL: {0}\n\nExpected an http:// or https:// origin.")]
    InvalidApiUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
