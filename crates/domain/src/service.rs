//! Service — what a teacher offers: subjects, levels, session length and fees.
//!
//! A [`ServiceDraft`] is the client-side form state. It becomes a
//! [`ServicePayload`] once validated and once every label has been mapped to
//! a backend identifier.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::id::{GradeLevelId, ServiceId, SubjectId, UserId};
use crate::reference::{self, GradeLevel, Subject};
use crate::teacher::Teacher;

/// Session lengths a teacher can offer, in minutes.
pub const SESSION_DURATIONS: [u32; 4] = [30, 60, 90, 120];

/// In-progress service form state; numeric fields hold raw user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub subjects: Vec<String>,
    pub domains: Vec<String>,
    pub sub_levels: Vec<String>,
    pub duration: String,
    pub fees: String,
    pub discount: String,
}

/// Numeric values extracted from a valid draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceTerms {
    pub duration_minutes: u32,
    pub fees: f64,
    pub discount: f64,
}

/// Validated, identifier-mapped service ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub subject_ids: Vec<SubjectId>,
    pub domains: Vec<String>,
    pub grade_level_ids: Vec<GradeLevelId>,
    pub duration_per_session: u32,
    pub hourly_rate: f64,
    pub discount: f64,
}

/// A service as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    #[serde(default)]
    pub teacher_id: Option<UserId>,
    #[serde(default)]
    pub subject_ids: Vec<SubjectId>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub grade_level_ids: Vec<GradeLevelId>,
    #[serde(default)]
    pub duration_per_session: Option<u32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
}

impl ServiceDraft {
    /// Pre-populate a draft from an existing teacher profile.
    ///
    /// Discount is not part of the profile and stays blank.
    #[must_use]
    pub fn from_teacher(teacher: &Teacher) -> Self {
        Self {
            subjects: teacher.subject_names(),
            domains: teacher.domains.clone(),
            sub_levels: teacher.sub_level_names(),
            duration: teacher
                .duration_per_session
                .map(|d| d.to_string())
                .unwrap_or_default(),
            fees: teacher
                .hourly_rate
                .map(|fees| fees.to_string())
                .unwrap_or_default(),
            discount: String::new(),
        }
    }

    /// Check every field and collect all failures.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found, in field order.
    pub fn validate(&self) -> Result<ServiceTerms, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.subjects.is_empty() {
            errors.push(ValidationError::NoSubjects);
        }
        if self.domains.is_empty() {
            errors.push(ValidationError::NoDomains);
        }
        if self.sub_levels.is_empty() {
            errors.push(ValidationError::NoSubLevels);
        }

        let duration = parse_duration(&self.duration).map_err(|err| errors.push(err));
        let fees = parse_positive(
            &self.fees,
            ValidationError::MissingFees,
            ValidationError::FeesNotANumber,
            ValidationError::FeesNotPositive,
        )
        .map_err(|err| errors.push(err));
        let discount = parse_positive(
            &self.discount,
            ValidationError::MissingDiscount,
            ValidationError::DiscountNotANumber,
            ValidationError::DiscountNotPositive,
        )
        .map_err(|err| errors.push(err));

        match (duration, fees, discount) {
            (Ok(duration_minutes), Ok(fees), Ok(discount)) if errors.is_empty() => {
                Ok(ServiceTerms {
                    duration_minutes,
                    fees,
                    discount,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate, then map subject and sub-level labels to backend ids.
    ///
    /// A label with no matching reference entry is reported as an error
    /// rather than dropped.
    ///
    /// # Errors
    ///
    /// Returns the validation errors, or the unknown-label errors when the
    /// draft is otherwise valid.
    pub fn to_payload(
        &self,
        subjects: &[Subject],
        levels: &[GradeLevel],
    ) -> Result<ServicePayload, ValidationErrors> {
        let terms = self.validate()?;
        let mut errors = ValidationErrors::new();

        let subject_ids: Vec<SubjectId> = self
            .subjects
            .iter()
            .filter_map(|name| match reference::find_subject(subjects, name) {
                Some(subject) => Some(subject.id),
                None => {
                    errors.push(ValidationError::UnknownSubject(name.clone()));
                    None
                }
            })
            .collect();

        let domains: Vec<String> = self
            .domains
            .iter()
            .filter_map(|name| match reference::find_domain(levels, name) {
                Some(domain) => Some(domain.to_string()),
                None => {
                    errors.push(ValidationError::UnknownDomain(name.clone()));
                    None
                }
            })
            .collect();

        let grade_level_ids: Vec<GradeLevelId> = self
            .sub_levels
            .iter()
            .filter_map(
                |name| match reference::find_sub_level(levels, &self.domains, name) {
                    Some(level) => Some(level.id),
                    None => {
                        errors.push(ValidationError::UnknownSubLevel(name.clone()));
                        None
                    }
                },
            )
            .collect();

        errors.into_result()?;
        Ok(ServicePayload {
            subject_ids,
            domains,
            grade_level_ids,
            duration_per_session: terms.duration_minutes,
            hourly_rate: terms.fees,
            discount: terms.discount,
        })
    }
}

fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingDuration);
    }
    raw.parse::<u32>()
        .ok()
        .filter(|minutes| SESSION_DURATIONS.contains(minutes))
        .ok_or_else(|| ValidationError::UnsupportedDuration(raw.to_string()))
}

fn parse_positive(
    raw: &str,
    missing: ValidationError,
    not_a_number: ValidationError,
    not_positive: ValidationError,
) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(missing);
    }
    let value: f64 = raw.parse().map_err(|_| not_a_number.clone())?;
    if !value.is_finite() {
        return Err(not_a_number);
    }
    if value <= 0.0 {
        return Err(not_positive);
    }
    Ok(value)
}
