//! Teacher listing use-case.
//!
//! Each call owns its [`ListingState`], so concurrent callers never see each
//! other's filter or results.

use std::sync::Arc;

use tutorhub_domain::filter::TeacherFilter;

use crate::listing::{FETCH_FAILED_MESSAGE, ListingState, Resolution};
use crate::ports::{DataClient, LocalStorage};
use crate::services::resource_service::ResourceService;

pub struct TeacherListingService<C, S> {
    resources: Arc<ResourceService<C, S>>,
}

impl<C: DataClient, S: LocalStorage> TeacherListingService<C, S> {
    pub fn new(resources: Arc<ResourceService<C, S>>) -> Self {
        Self { resources }
    }

    /// Fetch the teachers matching `filter`.
    ///
    /// The returned state holds the normalized filter and this fetch's own
    /// outcome.
    #[tracing::instrument(skip(self))]
    pub async fn apply_filter(&self, filter: TeacherFilter) -> ListingState {
        let mut listing = ListingState::new();
        let ticket = listing.begin(filter.normalized());

        let outcome = self
            .resources
            .filter_teachers(listing.filter())
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "teacher listing fetch failed");
                FETCH_FAILED_MESSAGE.to_string()
            });

        if listing.resolve(ticket, outcome) == Resolution::Stale {
            tracing::debug!(?ticket, "discarded stale listing response");
        }
        listing
    }
}
