//! Availability page — the teacher's weekly slots.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use tutorhub_app::pages::Page;
use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_domain::availability::Availability;

use super::{NavLink, authorize, nav};
use crate::error::DashboardError;
use crate::state::AppState;

pub struct SlotView {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&Availability> for SlotView {
    fn from(slot: &Availability) -> Self {
        Self {
            day: slot.day.to_string(),
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "availability.html")]
pub struct AvailabilityTemplate {
    nav: Vec<NavLink>,
    slots: Vec<SlotView>,
    error: String,
    next: &'static str,
}

impl IntoResponse for AvailabilityTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /dashboard/two` — list availability slots.
pub async fn show<C, S>(
    State(state): State<AppState<C, S>>,
) -> Result<AvailabilityTemplate, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = authorize(&state, Page::Availability)?;
    if let Err(err) = state.resources.fetch_all::<Availability>().await {
        tracing::debug!(error = %err, "availability unavailable");
    }
    let (slots, error): (Vec<SlotView>, String) = state.resources.store().select(|root| {
        (
            root.availability
                .collection()
                .iter()
                .map(SlotView::from)
                .collect(),
            root.availability.error().unwrap_or_default().to_string(),
        )
    });

    Ok(AvailabilityTemplate {
        nav: nav(&user, Some(Page::Availability)),
        slots,
        error,
        next: Page::ServiceDetails.path(),
    })
}
