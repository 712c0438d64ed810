//! Shared application state for axum handlers.

use std::sync::Arc;

use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_app::services::{
    ResourceService, ServiceDetailsService, SessionService, TeacherListingService,
};
use tutorhub_app::session::Session;
use tutorhub_app::store::SharedStore;

/// Application state shared across all axum handlers.
///
/// Generic over the data client and the local storage to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<C, S> {
    /// Slice operations against the backend.
    pub resources: Arc<ResourceService<C, Arc<S>>>,
    /// Logged-in user, persisted in local storage; login and logout drop the
    /// previous user's data.
    pub session: Arc<SessionService<C, Arc<S>>>,
    /// Service details form.
    pub service_details: Arc<ServiceDetailsService<C, Arc<S>>>,
    /// Teacher listing with its filter.
    pub teacher_listing: Arc<TeacherListingService<C, Arc<S>>>,
}

impl<C, S> Clone for AppState<C, S> {
    fn clone(&self) -> Self {
        Self {
            resources: Arc::clone(&self.resources),
            session: Arc::clone(&self.session),
            service_details: Arc::clone(&self.service_details),
            teacher_listing: Arc::clone(&self.teacher_listing),
        }
    }
}

impl<C, S> AppState<C, S>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    /// Wire every service around one client, one storage and one store.
    pub fn new(client: C, storage: S, store: SharedStore) -> Self {
        let storage = Arc::new(storage);
        let resources = Arc::new(ResourceService::new(client, Arc::clone(&storage), store));
        let service_details = Arc::new(ServiceDetailsService::new(Arc::clone(&resources)));
        Self {
            session: Arc::new(SessionService::new(
                Session::new(storage),
                Arc::clone(&resources),
                Arc::clone(&service_details),
            )),
            service_details,
            teacher_listing: Arc::new(TeacherListingService::new(Arc::clone(&resources))),
            resources,
        }
    }
}
