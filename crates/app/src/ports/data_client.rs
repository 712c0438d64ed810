//! Data client port — JSON requests against the REST backend.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use tutorhub_domain::error::TutorHubError;

/// HTTP verb of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// One request to the backend; `path` is relative to the configured base URL.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::Post, path).with_body(Some(body))
    }

    #[must_use]
    pub fn with_body(mut self, body: Option<serde_json::Value>) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

/// Issues JSON requests and decodes JSON responses.
///
/// Implementations attach `Authorization: Bearer <token>` when
/// [`ApiRequest::token`] is set and `Content-Type: application/json` when a
/// body is present. A single attempt is made: no retry, no backoff.
pub trait DataClient: Send + Sync {
    /// Send `request` and decode the response body into `T`.
    ///
    /// Fails with [`TutorHubError::Network`] on transport failure,
    /// [`TutorHubError::Http`] on a non-2xx status and
    /// [`TutorHubError::Decode`] when the payload has the wrong shape.
    fn send<T>(&self, request: ApiRequest) -> impl Future<Output = Result<T, TutorHubError>> + Send
    where
        T: DeserializeOwned + Send;
}

impl<C: DataClient> DataClient for Arc<C> {
    fn send<T>(&self, request: ApiRequest) -> impl Future<Output = Result<T, TutorHubError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        (**self).send(request)
    }
}
