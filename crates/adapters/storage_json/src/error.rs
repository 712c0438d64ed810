//! Storage adapter errors.

use std::path::PathBuf;

use tutorhub_domain::error::TutorHubError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unable to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid storage file")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for TutorHubError {
    fn from(err: StorageError) -> Self {
        TutorHubError::storage(err)
    }
}
