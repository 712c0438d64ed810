//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tutorhub_app::ports::{DataClient, LocalStorage};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard pages at `/` plus a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, S>(state: AppState<C, S>) -> Router
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes::<C, S>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tutorhub_app::memory_storage::MemoryStorage;
    use tutorhub_app::ports::{ApiRequest, Method};
    use tutorhub_app::store::SharedStore;
    use tutorhub_domain::error::TutorHubError;
    use tutorhub_domain::id::UserId;
    use tutorhub_domain::user::{Role, User};

    /// Canned backend answers, matched on path and optionally on the bearer
    /// token or the request body. The latest matching answer wins.
    #[derive(Default)]
    struct StubBackend {
        answers: Vec<Answer>,
        calls: Mutex<Vec<ApiRequest>>,
    }

    struct Answer {
        path: String,
        token: Option<String>,
        body: Option<Value>,
        response: Value,
    }

    impl Answer {
        fn matches(&self, request: &ApiRequest) -> bool {
            self.path == request.path
                && self.token.as_ref().is_none_or(|t| request.token.as_ref() == Some(t))
                && self.body.as_ref().is_none_or(|b| request.body.as_ref() == Some(b))
        }
    }

    impl StubBackend {
        fn with(self, path: &str, response: Value) -> Self {
            self.answer(path, None, None, response)
        }

        fn with_for_token(self, path: &str, token: &str, response: Value) -> Self {
            self.answer(path, Some(token.to_string()), None, response)
        }

        fn with_for_body(self, path: &str, body: Value, response: Value) -> Self {
            self.answer(path, None, Some(body), response)
        }

        fn answer(
            mut self,
            path: &str,
            token: Option<String>,
            body: Option<Value>,
            response: Value,
        ) -> Self {
            self.answers.push(Answer {
                path: path.to_string(),
                token,
                body,
                response,
            });
            self
        }
    }

    impl DataClient for StubBackend {
        fn send<T>(
            &self,
            request: ApiRequest,
        ) -> impl Future<Output = Result<T, TutorHubError>> + Send
        where
            T: DeserializeOwned + Send,
        {
            let result = match self.answers.iter().rev().find(|a| a.matches(&request)) {
                Some(answer) => {
                    serde_json::from_value(answer.response.clone()).map_err(TutorHubError::from)
                }
                None => Err(TutorHubError::Http {
                    status: 404,
                    body: String::new(),
                }),
            };
            self.calls.lock().unwrap().push(request);
            async move {
                // Let concurrent requests interleave with this one.
                tokio::task::yield_now().await;
                result
            }
        }
    }

    /// Reference data and a teacher listing every dashboard page can draw on.
    fn backend() -> StubBackend {
        StubBackend::default()
            .with(
                "/api/subjects/",
                json!([{"id": 1, "name": "Math"}, {"id": 2, "name": "Physics"}]),
            )
            .with(
                "/api/grade-levels/",
                json!([
                    {"id": 1, "domain": "O-level", "sub_level": "O1"},
                    {"id": 4, "domain": "A-level", "sub_level": "AS"}
                ]),
            )
            .with(
                "/api/teachers/filter-teachers",
                json!([
                    {"user_id": 1, "name": "Hina", "city_name": "Lahore", "phone_number": "03001234567"},
                    {"user_id": 2, "name": "Omar", "city_name": "Karachi"}
                ]),
            )
    }

    type TestState = AppState<Arc<StubBackend>, MemoryStorage>;

    fn test_state(role: Option<Role>) -> (TestState, Arc<StubBackend>) {
        test_state_with(backend(), role)
    }

    fn test_state_with(backend: StubBackend, role: Option<Role>) -> (TestState, Arc<StubBackend>) {
        let backend = Arc::new(backend);
        let state = AppState::new(
            Arc::clone(&backend),
            MemoryStorage::new(),
            SharedStore::default(),
        );
        if let Some(role) = role {
            let user = User::new(UserId::new(7), role, "tok-7").unwrap();
            state.session.login(&user).unwrap();
        }
        (state, backend)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (state, _) = test_state(None);
        let response = build(state).oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_show_login_form_when_nobody_logged_in() {
        let (state, _) = test_state(None);
        let response = build(state).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("action=\"/session\""));
    }

    #[tokio::test]
    async fn should_forbid_teacher_page_when_anonymous() {
        let (state, backend) = test_state(None);
        let response = build(state)
            .oneshot(get("/dashboard/three"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_text(response).await.contains("403"));
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_forbid_teacher_page_when_student_logged_in() {
        let (state, backend) = test_state(Some(Role::Student));
        let response = build(state)
            .oneshot(get("/dashboard/three"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_render_service_form_when_teacher_logged_in() {
        let (state, _) = test_state(Some(Role::Teacher));
        let response = build(state)
            .oneshot(get("/dashboard/three"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Select Details"));
        assert!(body.contains("value=\"Math\""));
        assert!(body.contains("value=\"O-level\""));
        assert!(body.contains(">Back</a>"));
    }

    #[tokio::test]
    async fn should_render_field_errors_without_saving_when_fees_negative() {
        let (state, backend) = test_state(Some(Role::Teacher));
        let app = build(state);
        app.clone()
            .oneshot(get("/dashboard/three"))
            .await
            .unwrap();

        let response = app
            .oneshot(post_form(
                "/dashboard/three",
                "subjects=Math&domains=O-level&sub_levels=O1&duration=60&fees=-5&discount=5",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response)
            .await
            .contains("Fees must be a positive number"));
        assert!(backend
            .calls
            .lock()
            .unwrap()
            .iter()
            .all(|call| call.method == Method::Get));
    }

    #[tokio::test]
    async fn should_redirect_after_domain_change() {
        let (state, _) = test_state(Some(Role::Teacher));
        let response = build(state)
            .oneshot(post_form("/dashboard/three/domains", "domains=A-level"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/dashboard/three"
        );
    }

    #[tokio::test]
    async fn should_list_teacher_cards_when_student_filters() {
        let (state, backend) = test_state(Some(Role::Student));
        let response = build(state)
            .oneshot(get("/teachers?subject=Math&city="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Hina"));
        assert!(body.contains("Omar"));
        assert!(body.contains("+923001234567"));
        assert!(body.contains("WhatsApp"));
        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls[0].body, Some(json!({"subject": "Math"})));
    }

    #[tokio::test]
    async fn should_forbid_listing_when_teacher_logged_in() {
        let (state, _) = test_state(Some(Role::Teacher));
        let response = build(state).oneshot(get("/teachers")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_store_session_and_redirect_home_on_login() {
        let (state, _) = test_state(None);
        let session = Arc::clone(&state.session);
        let response = build(state)
            .oneshot(post_form("/session", "user_id=12&role=admin&token=abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let user = session.current_user().unwrap().unwrap();
        assert_eq!(user.id, UserId::new(12));
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn should_reject_login_with_unknown_role() {
        let (state, _) = test_state(None);
        let response = build(state)
            .oneshot(post_form("/session", "user_id=12&role=janitor&token=abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    const VALID_FORM: &str =
        "subjects=Math&domains=O-level&sub_levels=O1&duration=60&fees=1200&discount=5";

    #[tokio::test]
    async fn should_uncheck_sub_levels_when_domains_change() {
        let (state, _) = test_state(Some(Role::Teacher));
        let details = Arc::clone(&state.service_details);
        let app = build(state);
        app.clone().oneshot(get("/dashboard/three")).await.unwrap();
        app.clone()
            .oneshot(post_form(
                "/dashboard/three",
                "subjects=Math&domains=O-level&sub_levels=O1&duration=60&fees=-5&discount=5",
            ))
            .await
            .unwrap();
        assert_eq!(details.form().draft().sub_levels, vec!["O1"]);

        let response = app
            .clone()
            .oneshot(post_form(
                "/dashboard/three/domains",
                "subjects=Math&domains=O-level&domains=A-level&duration=60&fees=-5&discount=5",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let body = body_text(app.oneshot(get("/dashboard/three")).await.unwrap()).await;
        assert!(details.form().draft().sub_levels.is_empty());
        assert!(body.contains("name=\"sub_levels\" value=\"O1\"> O1"));
        assert!(body.contains("name=\"sub_levels\" value=\"AS\"> AS"));
    }

    #[tokio::test]
    async fn should_redirect_and_show_saved_banner_when_form_valid() {
        let backend = backend().with("/api/teachers/setup-service", json!({"id": 3}));
        let (state, backend) = test_state_with(backend, Some(Role::Teacher));
        let app = build(state);
        app.clone().oneshot(get("/dashboard/three")).await.unwrap();

        let response = app
            .clone()
            .oneshot(post_form("/dashboard/three", VALID_FORM))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/dashboard/three"
        );
        assert!(backend
            .calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| call.method == Method::Post
                && call.path == "/api/teachers/setup-service"));
        let body = body_text(app.oneshot(get("/dashboard/three")).await.unwrap()).await;
        assert!(body.contains("User information has been updated!"));
        assert!(body.contains("banner success"));
    }

    #[tokio::test]
    async fn should_reject_sub_level_of_other_domain_when_submitted() {
        let (state, backend) = test_state(Some(Role::Teacher));
        let app = build(state);
        app.clone().oneshot(get("/dashboard/three")).await.unwrap();

        let response = app
            .oneshot(post_form(
                "/dashboard/three",
                "subjects=Math&domains=O-level&sub_levels=AS&duration=60&fees=1200&discount=5",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response).await.contains("Unknown sublevel: AS"));
        assert!(backend
            .calls
            .lock()
            .unwrap()
            .iter()
            .all(|call| call.method == Method::Get));
    }

    #[tokio::test]
    async fn should_show_own_profile_when_another_teacher_logs_in() {
        let backend = backend()
            .with_for_token(
                "/api/teachers/setup-profile",
                "tok-7",
                json!({"user_id": 7, "name": "Ali", "hourly_rate": 111.0}),
            )
            .with_for_token(
                "/api/teachers/setup-profile",
                "tok-8",
                json!({"user_id": 8, "name": "Sara", "hourly_rate": 222.0}),
            );
        let (state, _) = test_state_with(backend, Some(Role::Teacher));
        let app = build(state);
        let first = body_text(app.clone().oneshot(get("/dashboard/three")).await.unwrap()).await;
        assert!(first.contains("value=\"111\""));

        let response = app
            .clone()
            .oneshot(post_form("/session", "user_id=8&role=teacher&token=tok-8"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let second = body_text(app.oneshot(get("/dashboard/three")).await.unwrap()).await;
        assert!(second.contains("value=\"222\""));
        assert!(!second.contains("value=\"111\""));
    }

    #[tokio::test]
    async fn should_answer_each_listing_with_its_own_filter_when_requests_overlap() {
        let backend = backend()
            .with_for_body(
                "/api/teachers/filter-teachers",
                json!({"subject": "Math"}),
                json!([{"user_id": 1, "name": "Hina", "city_name": "Lahore"}]),
            )
            .with_for_body(
                "/api/teachers/filter-teachers",
                json!({"subject": "Physics"}),
                json!([{"user_id": 2, "name": "Omar", "city_name": "Karachi"}]),
            );
        let (state, _) = test_state_with(backend, Some(Role::Student));
        let app = build(state);

        let (math, physics) = tokio::join!(
            app.clone().oneshot(get("/teachers?subject=Math")),
            app.clone().oneshot(get("/teachers?subject=Physics")),
        );
        let math = body_text(math.unwrap()).await;
        let physics = body_text(physics.unwrap()).await;

        assert!(math.contains("Hina"));
        assert!(!math.contains("Omar"));
        assert!(math.contains("name=\"subject\" value=\"Math\""));
        assert!(physics.contains("Omar"));
        assert!(!physics.contains("Hina"));
        assert!(physics.contains("name=\"subject\" value=\"Physics\""));
    }
}
