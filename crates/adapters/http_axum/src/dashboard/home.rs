//! Dashboard home page — who is logged in and where they can go.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use tutorhub_app::ports::{DataClient, LocalStorage};

use super::{NavLink, nav};
use crate::error::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    nav: Vec<NavLink>,
    logged_in: bool,
    user_id: String,
    role: String,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — login form, or the pages open to the current role.
#[allow(clippy::unused_async)]
pub async fn index<C, S>(State(state): State<AppState<C, S>>) -> Result<HomeTemplate, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = state.session.current_user()?;
    Ok(match user {
        Some(user) => HomeTemplate {
            nav: nav(&user, None),
            logged_in: true,
            user_id: user.id.to_string(),
            role: user.role.to_string(),
        },
        None => HomeTemplate {
            nav: Vec::new(),
            logged_in: false,
            user_id: String::new(),
            role: String::new(),
        },
    })
}
