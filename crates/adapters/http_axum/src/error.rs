//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use tutorhub_app::pages::Page;
use tutorhub_domain::error::{AuthError, TutorHubError};

/// Fixed view shown when the user's role may not open a page.
#[derive(Template)]
#[template(path = "forbidden.html")]
pub struct ForbiddenTemplate {
    title: &'static str,
}

/// Generic error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Failure of a dashboard handler, rendered as an HTML page.
#[derive(Debug)]
pub enum DashboardError {
    /// The current user may not open the page.
    Forbidden(Page),
    /// The submitted form could not be parsed.
    BadRequest(String),
    Service(TutorHubError),
}

impl From<TutorHubError> for DashboardError {
    fn from(err: TutorHubError) -> Self {
        Self::Service(err)
    }
}

impl DashboardError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_)
            | Self::Service(
                TutorHubError::Validation(_) | TutorHubError::Auth(AuthError::UnknownRole(_)),
            ) => StatusCode::BAD_REQUEST,
            Self::Service(TutorHubError::Auth(_)) => StatusCode::UNAUTHORIZED,
            Self::Service(
                TutorHubError::Network(_) | TutorHubError::Http { .. } | TutorHubError::Decode(_),
            ) => StatusCode::BAD_GATEWAY,
            Self::Service(TutorHubError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Forbidden(page) => {
                tracing::debug!(path = page.path(), "page forbidden for current user");
                ForbiddenTemplate { title: page.title() }.to_string()
            }
            Self::BadRequest(message) => ErrorTemplate {
                status: status.as_u16(),
                message,
            }
            .to_string(),
            Self::Service(err) => {
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "dashboard request failed");
                    "internal server error".to_string()
                } else {
                    err.to_string()
                };
                ErrorTemplate {
                    status: status.as_u16(),
                    message,
                }
                .to_string()
            }
        };
        (status, Html(body)).into_response()
    }
}
