//! Resource service — runs slice operations against the backend.
//!
//! Every operation dispatches `Pending` before the request and exactly one of
//! the fulfilled actions or `Rejected` after it. Authenticated endpoints read
//! the bearer token from local storage first; a missing token rejects the
//! operation without issuing a request.

use std::fmt;

use serde::Serialize;

use tutorhub_domain::error::{AuthError, TutorHubError};
use tutorhub_domain::filter::TeacherFilter;
use tutorhub_domain::teacher::Teacher;

use crate::ports::{ACCESS_TOKEN_KEY, ApiRequest, DataClient, LocalStorage, Method};
use crate::resource::{Access, Endpoint, Resource};
use crate::slice::{Operation, SliceAction};
use crate::store::SharedStore;

/// Teacher search endpoint; the filter is sent as the JSON body.
pub const FILTER_TEACHERS_PATH: &str = "/api/teachers/filter-teachers";

/// Message stored in a slice when `op` on `E` fails with `err`.
///
/// Backend and payload failures use the resource's fixed message, anything
/// else keeps its own text.
#[must_use]
pub fn rejection_message<E: Resource>(op: Operation, err: &TutorHubError) -> String {
    match err {
        TutorHubError::Http { .. } | TutorHubError::Decode(_) => E::failure_message(op),
        other => other.to_string(),
    }
}

pub struct ResourceService<C, S> {
    client: C,
    storage: S,
    store: SharedStore,
}

impl<C: DataClient, S: LocalStorage> ResourceService<C, S> {
    pub fn new(client: C, storage: S, store: SharedStore) -> Self {
        Self {
            client,
            storage,
            store,
        }
    }

    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Empty the slice of `E`.
    pub fn reset<E: Resource>(&self) {
        self.store.dispatch(E::wrap(SliceAction::Reset));
    }

    /// Load the whole collection of `E` into its slice.
    ///
    /// # Errors
    ///
    /// Returns the failure that was also recorded in the slice.
    #[tracing::instrument(skip(self), fields(resource = E::PLURAL))]
    pub async fn fetch_all<E: Resource>(&self) -> Result<Vec<E>, TutorHubError> {
        let op = Operation::FetchAll;
        self.store.dispatch(E::wrap(SliceAction::Pending(op)));
        match self.call::<Vec<E>>(E::list_endpoint(), None).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "fetched collection");
                self.store.dispatch(E::wrap(SliceAction::FetchedAll(items.clone())));
                Ok(items)
            }
            Err(err) => Err(self.reject::<E>(op, err)),
        }
    }

    /// Load one `E` into the slice's `single` field.
    ///
    /// # Errors
    ///
    /// Returns the failure that was also recorded in the slice.
    #[tracing::instrument(skip(self), fields(resource = E::SINGULAR))]
    pub async fn fetch_by_id<E: Resource>(
        &self,
        id: impl fmt::Display + fmt::Debug + Send,
    ) -> Result<E, TutorHubError> {
        let op = Operation::FetchById;
        self.store.dispatch(E::wrap(SliceAction::Pending(op)));
        match self.call::<E>(E::item_endpoint(&id.to_string()), None).await {
            Ok(item) => {
                self.store.dispatch(E::wrap(SliceAction::FetchedOne(item.clone())));
                Ok(item)
            }
            Err(err) => Err(self.reject::<E>(op, err)),
        }
    }

    /// Write `payload` and upsert the returned record into the slice.
    ///
    /// # Errors
    ///
    /// Returns the failure that was also recorded in the slice.
    #[tracing::instrument(skip(self, payload), fields(resource = E::SINGULAR))]
    pub async fn save<E, P>(&self, payload: &P) -> Result<E, TutorHubError>
    where
        E: Resource,
        P: Serialize + Sync,
    {
        let op = Operation::Save;
        self.store.dispatch(E::wrap(SliceAction::Pending(op)));
        let outcome = match serde_json::to_value(payload) {
            Ok(body) => self.call::<E>(E::save_endpoint(), Some(body)).await,
            Err(err) => Err(err.into()),
        };
        match outcome {
            Ok(item) => {
                tracing::info!("saved");
                self.store.dispatch(E::wrap(SliceAction::Saved(item.clone())));
                Ok(item)
            }
            Err(err) => Err(self.reject::<E>(op, err)),
        }
    }

    /// Search teachers matching `filter`.
    ///
    /// The result is returned to the caller and not written to the store.
    ///
    /// # Errors
    ///
    /// Returns the transport, HTTP or decode failure.
    #[tracing::instrument(skip(self))]
    pub async fn filter_teachers(
        &self,
        filter: &TeacherFilter,
    ) -> Result<Vec<Teacher>, TutorHubError> {
        let body = serde_json::to_value(filter)?;
        let endpoint = Endpoint::new(Method::Post, FILTER_TEACHERS_PATH, Access::Public);
        let teachers: Vec<Teacher> = self.call(endpoint, Some(body)).await?;
        tracing::debug!(count = teachers.len(), "filtered teachers");
        Ok(teachers)
    }

    async fn call<T>(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<T, TutorHubError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let token = self.token_for(endpoint.access)?;
        let request = ApiRequest::new(endpoint.method, endpoint.path)
            .with_body(body)
            .with_token(token);
        self.client.send(request).await
    }

    fn token_for(&self, access: Access) -> Result<Option<String>, TutorHubError> {
        match access {
            Access::Public => Ok(None),
            Access::Bearer => self
                .storage
                .get_item(ACCESS_TOKEN_KEY)?
                .filter(|token| !token.trim().is_empty())
                .map(Some)
                .ok_or_else(|| AuthError::MissingToken.into()),
        }
    }

    fn reject<E: Resource>(&self, op: Operation, err: TutorHubError) -> TutorHubError {
        let message = rejection_message::<E>(op, &err);
        tracing::warn!(%op, error = %err, "request rejected");
        self.store
            .dispatch(E::wrap(SliceAction::Rejected { op, message }));
        err
    }
}
