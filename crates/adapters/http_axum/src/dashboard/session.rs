//! Login and logout forms.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_domain::error::TutorHubError;
use tutorhub_domain::id::UserId;
use tutorhub_domain::user::{Role, User};

use crate::error::DashboardError;
use crate::state::AppState;

/// Form data for logging in with credentials issued by the backend.
#[derive(Deserialize)]
pub struct LoginForm {
    pub user_id: String,
    pub role: String,
    pub token: String,
}

/// `POST /session` — store the user and token, then go home (PRG).
#[allow(clippy::unused_async)]
pub async fn login<C, S>(
    State(state): State<AppState<C, S>>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let id: UserId = form
        .user_id
        .parse()
        .map_err(|_| DashboardError::BadRequest(format!("invalid user id: {}", form.user_id)))?;
    let role: Role = form.role.parse().map_err(TutorHubError::from)?;
    let user = User::new(id, role, form.token)?;
    state.session.login(&user)?;
    Ok(Redirect::to("/"))
}

/// `POST /session/logout` — forget the user and token.
#[allow(clippy::unused_async)]
pub async fn logout<C, S>(State(state): State<AppState<C, S>>) -> Result<Redirect, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    state.session.logout()?;
    Ok(Redirect::to("/"))
}
