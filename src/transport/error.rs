use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] std::io::Error),
}
