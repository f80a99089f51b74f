//! Error types for remote API calls

use thiserror::Error;

/// Any failure while fetching from the character API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error at fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Error at fetching {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Error reading body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;
