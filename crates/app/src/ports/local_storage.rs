//! Local storage port — keyed client-side storage for the session.

use std::sync::Arc;

use tutorhub_domain::error::TutorHubError;

/// Key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Key holding the serialized logged-in [`User`](tutorhub_domain::user::User).
pub const USER_KEY: &str = "user";

/// Synchronous string key/value storage that survives restarts.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TutorHubError::Storage`] when the backing store is unreadable.
    fn get_item(&self, key: &str) -> Result<Option<String>, TutorHubError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TutorHubError::Storage`] when the backing store is unwritable.
    fn set_item(&self, key: &str, value: &str) -> Result<(), TutorHubError>;

    /// Remove `key`; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TutorHubError::Storage`] when the backing store is unwritable.
    fn remove_item(&self, key: &str) -> Result<(), TutorHubError>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, TutorHubError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TutorHubError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), TutorHubError> {
        (**self).remove_item(key)
    }
}
