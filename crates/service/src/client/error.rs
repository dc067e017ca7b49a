use reqwest::header::InvalidHeaderValue;

/// Failures building a client, before any call is made.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}
