use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("{source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{status} for url: {url}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReconError>;
