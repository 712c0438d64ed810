//! Terms and conditions for teachers.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use tutorhub_app::pages::Page;
use tutorhub_app::ports::{DataClient, LocalStorage};

use super::{NavLink, authorize, nav};
use crate::error::DashboardError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    nav: Vec<NavLink>,
}

impl IntoResponse for TermsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /dashboard/eight`
#[allow(clippy::unused_async)]
pub async fn show<C, S>(State(state): State<AppState<C, S>>) -> Result<TermsTemplate, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = authorize(&state, Page::Terms)?;
    Ok(TermsTemplate {
        nav: nav(&user, Some(Page::Terms)),
    })
}
