//! Service details form — subjects, levels, session length and fees.
//!
//! Multi-select controls post one `name=value` pair per selected option, so
//! the body is decoded with [`url::form_urlencoded`] instead of serde.

use askama::Template;
use axum::extract::{RawForm, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use tutorhub_app::banner::BannerKind;
use tutorhub_app::forms::{FormPhase, ServiceForm, SubmitError};
use tutorhub_app::pages::Page;
use tutorhub_app::ports::{DataClient, LocalStorage};
use tutorhub_domain::error::Field;
use tutorhub_domain::reference::{self, GradeLevel, Subject};
use tutorhub_domain::service::ServiceDraft;
use tutorhub_domain::time::{Timestamp, now};
use tutorhub_domain::user::User;

use super::{Choice, NavLink, authorize, nav};
use crate::error::DashboardError;
use crate::state::AppState;

/// Error message per field; empty when the field is fine.
#[derive(Default)]
pub struct FieldErrors {
    pub subject: String,
    pub domain: String,
    pub sub_level: String,
    pub duration: String,
    pub fees: String,
    pub discount: String,
}

#[derive(Template)]
#[template(path = "service_details.html")]
pub struct ServiceDetailsTemplate {
    nav: Vec<NavLink>,
    back: &'static str,
    subjects: Vec<Choice>,
    domains: Vec<Choice>,
    sub_levels: Vec<Choice>,
    sub_level_enabled: bool,
    durations: Vec<Choice>,
    fees: String,
    discount: String,
    errors: FieldErrors,
    banner_message: String,
    banner_class: &'static str,
    submitting: bool,
    load_error: String,
}

impl IntoResponse for ServiceDetailsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl ServiceDetailsTemplate {
    fn build(
        user: &User,
        form: &ServiceForm,
        subjects: &[Subject],
        levels: &[GradeLevel],
        load_error: String,
        now: Timestamp,
    ) -> Self {
        let draft = form.draft();
        let message = |field| {
            form.errors()
                .for_field(field)
                .map(ToString::to_string)
                .unwrap_or_default()
        };
        let (banner_message, banner_class) = match form.banner(now) {
            Some(banner) => (
                banner.message.clone(),
                match banner.kind {
                    BannerKind::Success => "banner success",
                    BannerKind::Error => "banner error",
                },
            ),
            None => (String::new(), ""),
        };

        Self {
            nav: nav(user, Some(Page::ServiceDetails)),
            back: Page::ServiceDetails.back().map_or("/", Page::path),
            subjects: subjects
                .iter()
                .map(|subject| Choice::new(subject.name.as_str(), &draft.subjects))
                .collect(),
            domains: reference::domains(levels)
                .into_iter()
                .map(|domain| Choice::new(domain, &draft.domains))
                .collect(),
            sub_levels: form
                .sub_level_options(levels)
                .into_iter()
                .map(|level| Choice::new(level.sub_level.as_str(), &draft.sub_levels))
                .collect(),
            sub_level_enabled: form.sub_level_enabled(levels),
            durations: ServiceForm::duration_options()
                .iter()
                .map(|minutes| {
                    Choice::new(minutes.to_string(), std::slice::from_ref(&draft.duration))
                })
                .collect(),
            fees: draft.fees.clone(),
            discount: draft.discount.clone(),
            errors: FieldErrors {
                subject: message(Field::Subject),
                domain: message(Field::Domain),
                sub_level: message(Field::SubLevel),
                duration: message(Field::Duration),
                fees: message(Field::Fees),
                discount: message(Field::Discount),
            },
            banner_message,
            banner_class,
            submitting: *form.phase() == FormPhase::Submitting,
            load_error,
        }
    }
}

/// Parse a urlencoded service form body, keeping repeated keys.
#[must_use]
pub fn parse_draft(body: &[u8]) -> ServiceDraft {
    let mut draft = ServiceDraft::default();
    for (key, value) in url::form_urlencoded::parse(body) {
        let value = value.into_owned();
        match key.as_ref() {
            "subjects" => draft.subjects.push(value),
            "domains" => draft.domains.push(value),
            "sub_levels" => draft.sub_levels.push(value),
            "duration" => draft.duration = value,
            "fees" => draft.fees = value,
            "discount" => draft.discount = value,
            _ => {}
        }
    }
    draft
}

fn render<C, S>(state: &AppState<C, S>, user: &User, load_error: String) -> ServiceDetailsTemplate
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let details = &state.service_details;
    ServiceDetailsTemplate::build(
        user,
        &details.form(),
        &details.subjects(),
        &details.grade_levels(),
        load_error,
        now(),
    )
}

/// `GET /dashboard/three` — load reference data and show the form.
pub async fn show<C, S>(
    State(state): State<AppState<C, S>>,
) -> Result<ServiceDetailsTemplate, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = authorize(&state, Page::ServiceDetails)?;
    let load_error = match state.service_details.load(user.id).await {
        Ok(()) => String::new(),
        Err(err) => {
            tracing::warn!(error = %err, "reference data unavailable");
            state
                .resources
                .store()
                .select(|root| {
                    root.subjects
                        .error()
                        .or_else(|| root.grade_levels.error())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| err.to_string())
        }
    };
    Ok(render(&state, &user, load_error))
}

/// `POST /dashboard/three` — validate and save (PRG on success or failure).
///
/// An invalid form is rendered again with its field errors and no request
/// is sent to the backend.
pub async fn submit<C, S>(
    State(state): State<AppState<C, S>>,
    RawForm(body): RawForm,
) -> Result<Response, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    let user = authorize(&state, Page::ServiceDetails)?;
    let timestamp = now();
    if let Err(err) = state.service_details.edit(parse_draft(&body), timestamp) {
        tracing::debug!(error = %err, "sub-level selection rejected");
    }

    match state.service_details.submit(timestamp).await {
        Ok(phase) => {
            tracing::info!(?phase, "service form submitted");
            Ok(Redirect::to(Page::ServiceDetails.path()).into_response())
        }
        Err(SubmitError::Invalid(errors)) => {
            tracing::debug!(%errors, "service form invalid");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                render(&state, &user, String::new()),
            )
                .into_response())
        }
        Err(SubmitError::InProgress) => Ok((
            StatusCode::CONFLICT,
            render(&state, &user, String::new()),
        )
            .into_response()),
    }
}

/// `POST /dashboard/three/domains` — apply a domain change, which clears the
/// selected sub-levels, and show the new sub-level options.
pub async fn change_domains<C, S>(
    State(state): State<AppState<C, S>>,
    RawForm(body): RawForm,
) -> Result<Redirect, DashboardError>
where
    C: DataClient + 'static,
    S: LocalStorage + 'static,
{
    authorize(&state, Page::ServiceDetails)?;
    let draft = ServiceDraft {
        sub_levels: Vec::new(),
        ..parse_draft(&body)
    };
    if let Err(err) = state.service_details.edit(draft, now()) {
        tracing::debug!(error = %err, "domain change rejected");
    }
    Ok(Redirect::to(Page::ServiceDetails.path()))
}
