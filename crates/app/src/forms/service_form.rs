//! Service details form — the teacher's multi-step service setup.
//!
//! ```text
//! Editing ──valid──▶ Submitting ──ok──▶ Success
//!    ▲                    │
//!    └──── next edit ── Failed ◀──err──┘
//! ```
//!
//! Validation failures keep the form in `Editing` and never reach the
//! network. Domain selection drives the sub-level options: changing the
//! domains clears the chosen sub-levels.

use tutorhub_domain::error::{ValidationError, ValidationErrors};
use tutorhub_domain::reference::{self, GradeLevel, Subject};
use tutorhub_domain::service::{SESSION_DURATIONS, ServiceDraft, ServicePayload};
use tutorhub_domain::teacher::Teacher;
use tutorhub_domain::time::Timestamp;

use crate::banner::Banner;

/// Message of the banner shown after a successful save.
pub const SAVED_MESSAGE: &str = "User information has been updated!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success,
    Failed(String),
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct ServiceForm {
    draft: ServiceDraft,
    phase: FormPhase,
    errors: ValidationErrors,
    banner: Option<Banner>,
    rejected_selection: Option<ValidationError>,
    prefilled: bool,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ServiceDraft::default(),
            phase: FormPhase::Editing,
            errors: ValidationErrors::new(),
            banner: None,
            rejected_selection: None,
            prefilled: false,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &ServiceDraft {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Field errors from the last rejected edit or submission.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The banner, while it is still within its display window.
    #[must_use]
    pub fn banner(&self, now: Timestamp) -> Option<&Banner> {
        self.banner.as_ref().filter(|banner| banner.is_visible(now))
    }

    #[must_use]
    pub fn is_prefilled(&self) -> bool {
        self.prefilled
    }

    /// Fill the form from an existing profile, once, and only while editing.
    pub fn prefill(&mut self, teacher: &Teacher) {
        if self.prefilled || self.phase != FormPhase::Editing {
            return;
        }
        self.draft = ServiceDraft::from_teacher(teacher);
        self.prefilled = true;
    }

    pub fn set_subjects(&mut self, subjects: Vec<String>) {
        self.touch();
        self.draft.subjects = subjects;
    }

    /// Replace the domain selection; the sub-level selection is always reset.
    pub fn set_domains(&mut self, domains: Vec<String>) {
        self.touch();
        self.draft.domains = domains;
        self.draft.sub_levels.clear();
        self.rejected_selection = None;
    }

    /// Replace the sub-level selection.
    ///
    /// # Errors
    ///
    /// Rejects the change while no domain is selected (raising an error
    /// banner), or when a sub-level is not offered by the selected domains.
    /// A rejected selection is kept in [`Self::errors`] and fails the next
    /// submission until the domains or sub-levels change again.
    pub fn set_sub_levels(
        &mut self,
        levels: &[GradeLevel],
        sub_levels: Vec<String>,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        self.touch();
        if self.draft.domains.is_empty() {
            let err = ValidationError::DomainRequiredFirst;
            self.banner = Some(Banner::error(err.to_string(), now));
            return Err(self.reject_selection(err));
        }
        let options = self.sub_level_options(levels);
        if let Some(unknown) = sub_levels.iter().find(|name| {
            !options
                .iter()
                .any(|lvl| reference::same_label(&lvl.sub_level, name))
        }) {
            let err = ValidationError::UnknownSubLevel(unknown.clone());
            return Err(self.reject_selection(err));
        }
        self.rejected_selection = None;
        self.draft.sub_levels = sub_levels;
        Ok(())
    }

    fn reject_selection(&mut self, err: ValidationError) -> ValidationError {
        self.errors = ValidationErrors::from(err.clone());
        self.rejected_selection = Some(err.clone());
        err
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.touch();
        self.draft.duration = duration.into();
    }

    pub fn set_fees(&mut self, fees: impl Into<String>) {
        self.touch();
        self.draft.fees = fees.into();
    }

    pub fn set_discount(&mut self, discount: impl Into<String>) {
        self.touch();
        self.draft.discount = discount.into();
    }

    /// Sub-levels offered for the current domain selection.
    #[must_use]
    pub fn sub_level_options<'a>(&self, levels: &'a [GradeLevel]) -> Vec<&'a GradeLevel> {
        reference::sub_levels_for(levels, &self.draft.domains)
    }

    /// The sub-level control is disabled while it has no options.
    #[must_use]
    pub fn sub_level_enabled(&self, levels: &[GradeLevel]) -> bool {
        !self.sub_level_options(levels).is_empty()
    }

    #[must_use]
    pub fn duration_options() -> &'static [u32] {
        &SESSION_DURATIONS
    }

    /// Validate and map the draft, entering `Submitting` on success.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InProgress`] while a previous submission is pending,
    /// [`SubmitError::Invalid`] when validation or label mapping fails.
    pub fn begin_submit(
        &mut self,
        subjects: &[Subject],
        levels: &[GradeLevel],
    ) -> Result<ServicePayload, SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InProgress);
        }
        self.phase = FormPhase::Editing;
        match (&self.rejected_selection, self.draft.to_payload(subjects, levels)) {
            (None, Ok(payload)) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Submitting;
                Ok(payload)
            }
            (rejected, outcome) => {
                let mut errors: ValidationErrors = rejected.iter().cloned().collect();
                if let Err(found) = outcome {
                    errors.extend(found);
                }
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the save started by [`Self::begin_submit`].
    pub fn finish(&mut self, outcome: Result<(), String>, now: Timestamp) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Success;
                self.banner = Some(Banner::success(SAVED_MESSAGE, now));
            }
            Err(message) => {
                self.banner = Some(Banner::error(message.clone(), now));
                self.phase = FormPhase::Failed(message);
            }
        }
    }

    fn touch(&mut self) {
        if matches!(self.phase, FormPhase::Failed(_) | FormPhase::Success) {
            self.phase = FormPhase::Editing;
        }
    }
}
