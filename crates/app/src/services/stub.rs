//! Recording [`DataClient`] used by service tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use tutorhub_domain::error::TutorHubError;

use crate::ports::{ApiRequest, DataClient, Method};

pub(crate) struct StubClient {
    routes: Mutex<HashMap<(Method, String), Result<Value, u16>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubClient {
    pub(crate) fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond(self, method: Method, path: &str, body: Value) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(body));
        self
    }

    pub(crate) fn fail(self, method: Method, path: &str, status: u16) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Err(status));
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl DataClient for StubClient {
    fn send<T>(&self, request: ApiRequest) -> impl Future<Output = Result<T, TutorHubError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let route = self
            .routes
            .lock()
            .unwrap()
            .get(&(request.method, request.path.clone()))
            .cloned();
        self.calls.lock().unwrap().push(request.clone());
        let result = match route {
            Some(Ok(body)) => serde_json::from_value(body).map_err(TutorHubError::from),
            Some(Err(status)) => Err(TutorHubError::Http {
                status,
                body: "server error".to_string(),
            }),
            None => Err(TutorHubError::network(format!(
                "connection refused: {} {}",
                request.method, request.path
            ))),
        };
        async move { result }
    }
}
