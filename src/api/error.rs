/// Failure taxonomy for calls against the store API
///
/// Every failure is captured as a query or mutation error state and
/// never escapes the request cache, so the type is `Clone` and carries
/// plain messages rather than the underlying transport errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be parsed into the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// The store answered with a well-formed error (e.g., not found)
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },
}

impl FetchError {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Decode(_) => "decode",
            FetchError::Remote { .. } => "remote",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
