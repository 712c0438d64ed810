//! reqwest-backed [`DataClient`].

use std::future::Future;

use serde::de::DeserializeOwned;
use url::Url;

use tutorhub_app::ports::{ApiRequest, DataClient, Method};
use tutorhub_domain::error::TutorHubError;

use crate::error::ClientError;

/// JSON client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// Request paths are appended to the base URL as-is, so a base with a
    /// path prefix (`https://host/backend`) keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when `base_url` is not an absolute http(s) URL
    /// or the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn execute<T>(&self, request: ApiRequest) -> Result<T, TutorHubError>
    where
        T: DeserializeOwned,
    {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let url = self.url(&request.path);
        tracing::debug!(%method, %url, authenticated = request.token.is_some(), "sending request");

        let mut builder = self.http.request(method, &url);
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "request could not be sent");
            TutorHubError::from(ClientError::from(err))
        })?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| TutorHubError::from(ClientError::from(err)))?;
        tracing::debug!(%url, status = status.as_u16(), "received response");

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend rejected request");
            return Err(TutorHubError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(%url, error = %err, "unexpected response payload");
            TutorHubError::Decode(err)
        })
    }
}

impl DataClient for ReqwestClient {
    fn send<T>(&self, request: ApiRequest) -> impl Future<Output = Result<T, TutorHubError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct City {
        id: u64,
        name: String,
    }

    #[tokio::test]
    async fn should_decode_json_when_backend_answers_ok() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/cities/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([{"id": 1, "name": "Lahore"}]));
        });
        let client = ReqwestClient::new(&server.base_url()).unwrap();

        let cities: Vec<City> = client.send(ApiRequest::get("/api/cities/")).await.unwrap();

        mock.assert();
        assert_eq!(
            cities,
            vec![City {
                id: 1,
                name: "Lahore".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn should_attach_bearer_token_when_present() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/teachers/setup-profile")
                .header("Authorization", "Bearer tok-42");
            then.status(200).json_body(json!({"ok": true}));
        });
        let client = ReqwestClient::new(&server.base_url()).unwrap();

        let request = ApiRequest::get("/api/teachers/setup-profile")
            .with_token(Some("tok-42".to_string()));
        let body: Value = client.send(request).await.unwrap();

        mock.assert();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn should_send_json_body_with_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/teachers/filter-teachers")
                .header("Content-Type", "application/json")
                .json_body(json!({"subject": "Math"}));
            then.status(200).json_body(json!([]));
        });
        let client = ReqwestClient::new(&server.base_url()).unwrap();

        let request = ApiRequest::post("/api/teachers/filter-teachers", json!({"subject": "Math"}));
        let teachers: Vec<Value> = client.send(request).await.unwrap();

        mock.assert();
        assert!(teachers.is_empty());
    }

    #[tokio::test]
    async fn should_surface_status_and_body_when_backend_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/teachers/get-all-teachers/");
            then.status(500).body("database is down");
        });
        let client = ReqwestClient::new(&server.base_url()).unwrap();

        let err = client
            .send::<Value>(ApiRequest::get("/api/teachers/get-all-teachers/"))
            .await
            .unwrap_err();

        match err {
            TutorHubError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "database is down");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_report_decode_error_when_payload_has_wrong_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/cities/");
            then.status(200).json_body(json!({"cities": []}));
        });
        let client = ReqwestClient::new(&server.base_url()).unwrap();

        let err = client
            .send::<Vec<City>>(ApiRequest::get("/api/cities/"))
            .await
            .unwrap_err();

        assert!(matches!(err, TutorHubError::Decode(_)));
    }

    #[tokio::test]
    async fn should_report_network_error_when_backend_unreachable() {
        let client = ReqwestClient::new("http://127.0.0.1:1").unwrap();

        let err = client
            .send::<Value>(ApiRequest::get("/api/cities/"))
            .await
            .unwrap_err();

        assert!(matches!(err, TutorHubError::Network(_)));
    }

    #[tokio::test]
    async fn should_keep_base_path_prefix_when_joining() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/backend/api/subjects/");
            then.status(200).json_body(json!([]));
        });
        let client = ReqwestClient::new(&server.url("/backend/")).unwrap();

        let subjects: Vec<Value> = client.send(ApiRequest::get("/api/subjects/")).await.unwrap();

        mock.assert();
        assert!(subjects.is_empty());
    }

    #[test]
    fn should_reject_non_http_base_url() {
        assert!(matches!(
            ReqwestClient::new("ftp://example.com"),
            Err(ClientError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
        assert!(matches!(
            ReqwestClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
