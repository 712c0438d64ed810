//! Errors raised while building or using the HTTP client.

use tutorhub_domain::error::TutorHubError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("backend url must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<ClientError> for TutorHubError {
    fn from(err: ClientError) -> Self {
        TutorHubError::network(err)
    }
}
