//! Server-side rendered HTML dashboard (no JavaScript).

pub mod availability;
pub mod home;
pub mod service_details;
pub mod session;
pub mod teachers;
pub mod terms;

use axum::Router;
use axum::routing::{get, post};

use tutorhub_app::pages::{self, Gate, Page};
use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_domain::user::User;

use crate::error::DashboardError;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<C, S>() -> Router<AppState<C, S>>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    Router::new()
        .route("/", get(home::index::<C, S>))
        .route("/session", post(session::login::<C, S>))
        .route("/session/logout", post(session::logout::<C, S>))
        .route(Page::Availability.path(), get(availability::show::<C, S>))
        .route(
            Page::ServiceDetails.path(),
            get(service_details::show::<C, S>).post(service_details::submit::<C, S>),
        )
        .route(
            "/dashboard/three/domains",
            post(service_details::change_domains::<C, S>),
        )
        .route(Page::Terms.path(), get(terms::show::<C, S>))
        .route(Page::TeacherListing.path(), get(teachers::list::<C, S>))
}

/// Navigation entry in the page header.
pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Links to every page `user` may open.
#[must_use]
pub fn nav(user: &User, current: Option<Page>) -> Vec<NavLink> {
    Page::visible_to(user.role)
        .into_iter()
        .map(|page| NavLink {
            path: page.path(),
            title: page.title(),
            active: Some(page) == current,
        })
        .collect()
}

/// Resolve the logged-in user and gate `page` by their role.
///
/// # Errors
///
/// Returns [`DashboardError::Forbidden`] when nobody is logged in or the role
/// is not allowed, or a storage error when the session cannot be read.
pub fn authorize<C, S>(state: &AppState<C, S>, page: Page) -> Result<User, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = state.session.current_user()?;
    match (pages::render(page, user.as_ref()), user) {
        (Gate::Mount(_), Some(user)) => Ok(user),
        _ => Err(DashboardError::Forbidden(page)),
    }
}

/// A selectable option in a form control.
pub struct Choice {
    pub value: String,
    pub selected: bool,
}

impl Choice {
    fn new(value: impl Into<String>, selected: &[String]) -> Self {
        let value = value.into();
        let selected = selected.contains(&value);
        Self { value, selected }
    }
}
