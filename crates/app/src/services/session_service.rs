//! Session use-case — login and logout scoped to one user's data.
//!
//! Everything fetched with the previous user's token (their profile, their
//! services, students, availability, contracts, notifications) and the
//! service form are dropped whenever the logged-in user changes. Public
//! reference data (subjects, grade levels, cities) is kept.

use std::sync::Arc;

use tutorhub_domain::availability::Availability;
use tutorhub_domain::contract::Contract;
use tutorhub_domain::error::TutorHubError;
use tutorhub_domain::notification::Notification;
use tutorhub_domain::service::ServiceRecord;
use tutorhub_domain::student::Student;
use tutorhub_domain::teacher::Teacher;
use tutorhub_domain::user::User;

use crate::ports::{DataClient, LocalStorage};
use crate::services::resource_service::ResourceService;
use crate::services::service_details::ServiceDetailsService;
use crate::session::Session;

pub struct SessionService<C, S> {
    session: Session<S>,
    resources: Arc<ResourceService<C, S>>,
    service_details: Arc<ServiceDetailsService<C, S>>,
}

impl<C: DataClient, S: LocalStorage> SessionService<C, S> {
    pub fn new(
        session: Session<S>,
        resources: Arc<ResourceService<C, S>>,
        service_details: Arc<ServiceDetailsService<C, S>>,
    ) -> Self {
        Self {
            session,
            resources,
            service_details,
        }
    }

    /// Store `user` as the logged-in user, starting from empty user data.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the session cannot be written.
    pub fn login(&self, user: &User) -> Result<(), TutorHubError> {
        self.session.login(user)?;
        self.forget_user_data();
        Ok(())
    }

    /// Log out and drop the user's data.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the session cannot be removed.
    pub fn logout(&self) -> Result<(), TutorHubError> {
        self.session.logout()?;
        self.forget_user_data();
        Ok(())
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage or decode error from the session record.
    pub fn current_user(&self) -> Result<Option<User>, TutorHubError> {
        self.session.current_user()
    }

    fn forget_user_data(&self) {
        self.service_details.reset();
        self.resources.reset::<Teacher>();
        self.resources.reset::<ServiceRecord>();
        self.resources.reset::<Student>();
        self.resources.reset::<Availability>();
        self.resources.reset::<Contract>();
        self.resources.reset::<Notification>();
        tracing::debug!("user data cleared");
    }
}
