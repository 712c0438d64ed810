//! Teacher listing with subject and city filters.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use tutorhub_app::listing::{ListingRender, TeacherCard};
use tutorhub_app::pages::Page;
use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_domain::filter::TeacherFilter;

use super::{NavLink, authorize, nav};
use crate::error::DashboardError;
use crate::state::AppState;

/// Filter fields from the query string; blank values mean "any".
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub subject: Option<String>,
    pub city: Option<String>,
    pub domain: Option<String>,
}

pub struct CardView {
    pub name: String,
    pub city: String,
    pub subjects: String,
    pub email: String,
    pub phone: String,
    pub whatsapp_url: String,
}

impl From<TeacherCard> for CardView {
    fn from(card: TeacherCard) -> Self {
        Self {
            name: card.name,
            city: card.city.unwrap_or_default(),
            subjects: card.subjects.join(", "),
            email: card.email.unwrap_or_default(),
            phone: card.phone.unwrap_or_default(),
            whatsapp_url: card.whatsapp_url.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "teachers.html")]
pub struct TeachersTemplate {
    nav: Vec<NavLink>,
    subject: String,
    city: String,
    domain: String,
    loading: bool,
    error: String,
    empty: String,
    cards: Vec<CardView>,
}

impl IntoResponse for TeachersTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /teachers?subject=…&city=…&domain=…` — filter and list teachers.
///
/// The page always shows the result of its own fetch.
pub async fn list<C, S>(
    State(state): State<AppState<C, S>>,
    Query(query): Query<ListingQuery>,
) -> Result<TeachersTemplate, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = authorize(&state, Page::TeacherListing)?;
    let filter = TeacherFilter {
        subject: query.subject,
        city: query.city,
        domain: query.domain,
    };
    let listing = state.teacher_listing.apply_filter(filter).await;
    let filter = listing.filter();

    let mut page = TeachersTemplate {
        nav: nav(&user, Some(Page::TeacherListing)),
        subject: filter.subject.clone().unwrap_or_default(),
        city: filter.city.clone().unwrap_or_default(),
        domain: filter.domain.clone().unwrap_or_default(),
        loading: false,
        error: String::new(),
        empty: String::new(),
        cards: Vec::new(),
    };
    match listing.render() {
        ListingRender::Loading => page.loading = true,
        ListingRender::Error(message) => page.error = message,
        ListingRender::Empty(message) => page.empty = message.to_string(),
        ListingRender::Grid(cards) => page.cards = cards.into_iter().map(CardView::from).collect(),
    }
    Ok(page)
}
