use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure talking to a remote service.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
