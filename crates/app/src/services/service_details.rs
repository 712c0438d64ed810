//! Service details use-case — drives the [`ServiceForm`] against the backend.
//!
//! Reference data (subjects and grade levels) is read from the store; the
//! form lock is released before every network call.

use std::sync::{Arc, Mutex};

use tutorhub_domain::error::{TutorHubError, ValidationError};
use tutorhub_domain::id::UserId;
use tutorhub_domain::reference::{GradeLevel, Subject};
use tutorhub_domain::service::{ServiceDraft, ServiceRecord};
use tutorhub_domain::teacher::Teacher;
use tutorhub_domain::time::Timestamp;

use crate::forms::{FormPhase, ServiceForm, SubmitError};
use crate::ports::{DataClient, LocalStorage};
use crate::services::resource_service::{ResourceService, rejection_message};
use crate::slice::Operation;
use crate::store::lock;

pub struct ServiceDetailsService<C, S> {
    resources: Arc<ResourceService<C, S>>,
    form: Mutex<ServiceForm>,
}

impl<C: DataClient, S: LocalStorage> ServiceDetailsService<C, S> {
    pub fn new(resources: Arc<ResourceService<C, S>>) -> Self {
        Self {
            resources,
            form: Mutex::new(ServiceForm::new()),
        }
    }

    /// Copy of the current form state.
    #[must_use]
    pub fn form(&self) -> ServiceForm {
        lock(&self.form).clone()
    }

    #[must_use]
    pub fn subjects(&self) -> Vec<Subject> {
        self.resources
            .store()
            .select(|state| state.subjects.collection().to_vec())
    }

    #[must_use]
    pub fn grade_levels(&self) -> Vec<GradeLevel> {
        self.resources
            .store()
            .select(|state| state.grade_levels.collection().to_vec())
    }

    /// Drop the draft, errors and banner, and allow a new pre-fill.
    pub fn reset(&self) {
        *lock(&self.form) = ServiceForm::new();
    }

    /// Fetch the reference data and pre-fill the form from the teacher's
    /// existing profile.
    ///
    /// A teacher without a profile yet starts from a blank form.
    ///
    /// # Errors
    ///
    /// Returns the first reference data failure.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, teacher_id: UserId) -> Result<(), TutorHubError> {
        let subjects = self.resources.fetch_all::<Subject>().await;
        let levels = self.resources.fetch_all::<GradeLevel>().await;
        match self.resources.fetch_by_id::<Teacher>(teacher_id).await {
            Ok(teacher) => lock(&self.form).prefill(&teacher),
            Err(err) => tracing::info!(error = %err, "no existing profile to pre-fill"),
        }
        subjects?;
        levels?;
        Ok(())
    }

    /// Apply a whole submitted draft, domains before sub-levels.
    ///
    /// # Errors
    ///
    /// Returns the sub-level rejection; the other fields are still applied.
    pub fn edit(&self, draft: ServiceDraft, now: Timestamp) -> Result<(), ValidationError> {
        let levels = self.grade_levels();
        let mut form = lock(&self.form);
        form.set_subjects(draft.subjects);
        form.set_domains(draft.domains);
        form.set_duration(draft.duration);
        form.set_fees(draft.fees);
        form.set_discount(draft.discount);
        if draft.sub_levels.is_empty() {
            return Ok(());
        }
        form.set_sub_levels(&levels, draft.sub_levels, now)
    }

    /// Validate and save the form.
    ///
    /// Returns the phase the form ended in: `Success` or `Failed`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when nothing was sent: the form is invalid or
    /// a save is already running.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self, now: Timestamp) -> Result<FormPhase, SubmitError> {
        let subjects = self.subjects();
        let levels = self.grade_levels();
        let payload = lock(&self.form).begin_submit(&subjects, &levels)?;

        let outcome = self
            .resources
            .save::<ServiceRecord, _>(&payload)
            .await
            .map(|_| ())
            .map_err(|err| rejection_message::<ServiceRecord>(Operation::Save, &err));

        let mut form = lock(&self.form);
        form.finish(outcome, now);
        Ok(form.phase().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_storage::MemoryStorage;
    use crate::ports::{ACCESS_TOKEN_KEY, Method};
    use crate::services::stub::StubClient;
    use crate::store::SharedStore;
    use serde_json::json;
    use tutorhub_domain::time::now;

    fn stub() -> StubClient {
        StubClient::new()
            .respond(
                Method::Get,
                "/api/subjects/",
                json!([{"id": 1, "name": "Math"}, {"id": 2, "name": "Physics"}]),
            )
            .respond(
                Method::Get,
                "/api/grade-levels/",
                json!([
                    {"id": 1, "domain": "O-level", "sub_level": "O1"},
                    {"id": 2, "domain": "O-level", "sub_level": "O2"},
                    {"id": 4, "domain": "A-level", "sub_level": "AS"}
                ]),
            )
    }

    type TestDetails = ServiceDetailsService<Arc<StubClient>, MemoryStorage>;

    fn details(client: StubClient) -> (TestDetails, Arc<StubClient>) {
        let client = Arc::new(client);
        let storage = MemoryStorage::new();
        storage.set_item(ACCESS_TOKEN_KEY, "tok").unwrap();
        let resources = ResourceService::new(client.clone(), storage, SharedStore::default());
        (ServiceDetailsService::new(Arc::new(resources)), client)
    }

    fn valid_draft() -> ServiceDraft {
        ServiceDraft {
            subjects: vec!["Physics".to_string()],
            domains: vec!["O-level".to_string()],
            sub_levels: vec!["O2".to_string()],
            duration: "90".to_string(),
            fees: "2500".to_string(),
            discount: "10".to_string(),
        }
    }

    #[tokio::test]
    async fn should_prefill_form_when_profile_exists() {
        let client = stub().respond(
            Method::Get,
            "/api/teachers/setup-profile",
            json!({
                "user_id": 5,
                "name": "Ali",
                "subjects": [{"id": 1, "name": "Math"}],
                "domains": ["A-level"],
                "hourly_rate": 1800.0
            }),
        );
        let (details, _) = details(client);

        details.load(UserId::new(5)).await.unwrap();

        let form = details.form();
        assert!(form.is_prefilled());
        assert_eq!(form.draft().subjects, vec!["Math"]);
        assert_eq!(form.draft().domains, vec!["A-level"]);
        assert_eq!(details.grade_levels().len(), 3);
    }

    #[tokio::test]
    async fn should_start_blank_when_profile_missing() {
        let client = stub().fail(Method::Get, "/api/teachers/setup-profile", 404);
        let (details, _) = details(client);

        details.load(UserId::new(5)).await.unwrap();

        assert!(!details.form().is_prefilled());
    }

    #[tokio::test]
    async fn should_not_call_backend_when_fees_negative() {
        let (details, client) = details(stub());
        details.load(UserId::new(5)).await.unwrap();
        let mut draft = valid_draft();
        draft.fees = "-5".to_string();
        details.edit(draft, now()).unwrap();

        let calls_before = client.calls().len();
        let err = details.submit(now()).await.unwrap_err();

        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert!(errors.contains(&ValidationError::FeesNotPositive));
        assert_eq!(client.calls().len(), calls_before);
        assert_eq!(details.form().phase(), &FormPhase::Editing);
    }

    #[tokio::test]
    async fn should_send_mapped_ids_and_succeed_when_valid() {
        let client = stub().respond(
            Method::Post,
            "/api/teachers/setup-service",
            json!({"id": 3}),
        );
        let (details, client) = details(client);
        details.load(UserId::new(5)).await.unwrap();
        details.edit(valid_draft(), now()).unwrap();

        let phase = details.submit(now()).await.unwrap();

        assert_eq!(phase, FormPhase::Success);
        let save = client
            .calls()
            .into_iter()
            .find(|call| call.method == Method::Post)
            .unwrap();
        let body = save.body.unwrap();
        assert_eq!(body["subject_ids"], json!([2]));
        assert_eq!(body["grade_level_ids"], json!([2]));
        assert_eq!(body["duration_per_session"], json!(90));
        assert_eq!(save.token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn should_fail_with_save_message_when_backend_rejects() {
        let client = stub().fail(Method::Post, "/api/teachers/setup-service", 500);
        let (details, _) = details(client);
        details.load(UserId::new(5)).await.unwrap();
        details.edit(valid_draft(), now()).unwrap();

        let phase = details.submit(now()).await.unwrap();

        assert_eq!(phase, FormPhase::Failed("Failed to save service".to_string()));
    }

    #[tokio::test]
    async fn should_clear_sub_levels_when_domains_change() {
        let (details, _) = details(stub());
        details.load(UserId::new(5)).await.unwrap();
        details.edit(valid_draft(), now()).unwrap();

        let mut draft = valid_draft();
        draft.domains = vec!["A-level".to_string()];
        draft.sub_levels.clear();
        details.edit(draft, now()).unwrap();

        assert!(details.form().draft().sub_levels.is_empty());
    }

    #[tokio::test]
    async fn should_reject_sub_levels_when_no_domain_submitted() {
        let (details, _) = details(stub());
        details.load(UserId::new(5)).await.unwrap();
        let mut draft = valid_draft();
        draft.domains.clear();

        let err = details.edit(draft, now()).unwrap_err();

        assert_eq!(err, ValidationError::DomainRequiredFirst);
        assert!(details.form().banner(now()).is_some());
    }
}
