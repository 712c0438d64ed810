//! Teacher listing — filter, fetch lifecycle and what to render.
//!
//! Every fetch is issued under a [`Ticket`]. Only the response carrying the
//! latest ticket is applied; anything older is reported as
//! [`Resolution::Stale`] and dropped.

use tutorhub_domain::filter::TeacherFilter;
use tutorhub_domain::teacher::Teacher;

use crate::async_result::AsyncResult;

/// Shown when the listing fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";
/// Shown when the filter matches nobody.
pub const EMPTY_MESSAGE: &str = "No users found";

/// Identifies one listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// One teacher as shown in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCard {
    pub name: String,
    pub city: Option<String>,
    pub subjects: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp_url: Option<String>,
    pub picture: Option<String>,
}

impl From<&Teacher> for TeacherCard {
    fn from(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            city: teacher.city_name.clone(),
            subjects: teacher.subject_names(),
            email: teacher.email.clone(),
            phone: teacher.international_phone(),
            whatsapp_url: teacher.whatsapp_url(),
            picture: teacher.profile_picture.clone(),
        }
    }
}

/// Exactly one of these is rendered at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingRender {
    Loading,
    Error(String),
    Empty(&'static str),
    Grid(Vec<TeacherCard>),
}

#[derive(Debug, Clone, Default)]
pub struct ListingState {
    filter: TeacherFilter,
    result: AsyncResult<Vec<Teacher>>,
    latest: u64,
}

impl ListingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> &TeacherFilter {
        &self.filter
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.result.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.result.error()
    }

    /// Start a fetch for `filter`, superseding any fetch still in flight.
    pub fn begin(&mut self, filter: TeacherFilter) -> Ticket {
        self.latest += 1;
        self.filter = filter;
        self.result.start();
        Ticket(self.latest)
    }

    /// Apply the outcome of the fetch issued under `ticket`, unless a newer
    /// fetch has started since.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<Teacher>, String>,
    ) -> Resolution {
        if ticket.0 != self.latest {
            return Resolution::Stale;
        }
        self.result.resolve(outcome);
        Resolution::Applied
    }

    #[must_use]
    pub fn render(&self) -> ListingRender {
        match &self.result {
            AsyncResult::Idle | AsyncResult::Loading => ListingRender::Loading,
            AsyncResult::Failed(message) => ListingRender::Error(message.clone()),
            AsyncResult::Ready(teachers) if teachers.is_empty() => {
                ListingRender::Empty(EMPTY_MESSAGE)
            }
            AsyncResult::Ready(teachers) => {
                ListingRender::Grid(teachers.iter().map(TeacherCard::from).collect())
            }
        }
    }
}
