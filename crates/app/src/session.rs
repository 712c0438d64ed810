//! Session — the logged-in user, persisted in local storage.
//!
//! Login writes the user record and its bearer token; logout removes both.
//! The token key is what authenticated requests read before every call.

use tutorhub_domain::error::TutorHubError;
use tutorhub_domain::user::User;

use crate::ports::{ACCESS_TOKEN_KEY, LocalStorage, USER_KEY};

pub struct Session<S> {
    storage: S,
}

impl<S: LocalStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `user` and its token.
    ///
    /// # Errors
    ///
    /// Returns a storage error, or [`TutorHubError::Decode`] if the user
    /// cannot be serialized.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id, role = %user.role))]
    pub fn login(&self, user: &User) -> Result<(), TutorHubError> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(USER_KEY, &json)?;
        self.storage.set_item(ACCESS_TOKEN_KEY, &user.token)?;
        tracing::info!("user logged in");
        Ok(())
    }

    /// Forget the current user and token.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the keys cannot be removed.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) -> Result<(), TutorHubError> {
        self.storage.remove_item(USER_KEY)?;
        self.storage.remove_item(ACCESS_TOKEN_KEY)?;
        tracing::info!("user logged out");
        Ok(())
    }

    /// The logged-in user, if any.
    ///
    /// A stored user whose token was removed separately is treated as
    /// logged out.
    ///
    /// # Errors
    ///
    /// Returns a storage error, or [`TutorHubError::Decode`] when the stored
    /// record is corrupt.
    pub fn current_user(&self) -> Result<Option<User>, TutorHubError> {
        let Some(json) = self.storage.get_item(USER_KEY)? else {
            return Ok(None);
        };
        if self.storage.get_item(ACCESS_TOKEN_KEY)?.is_none() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&json)?))
    }
}
