//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TutorHubError`] via `#[from]` / `From` impls.

use std::fmt;

/// Boxed error used for transport and storage sources owned by adapters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type shared by the domain, application and adapters.
#[derive(Debug, thiserror::Error)]
pub enum TutorHubError {
    /// Client-side schema violation, detected before any network call.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Missing or invalid credentials, detected before issuing a request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The transport failed (connection refused, DNS, TLS, …).
    #[error(transparent)]
    Network(BoxError),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16, body: String },

    /// The backend payload did not match the expected shape.
    #[error("failed to decode response")]
    Decode(#[from] serde_json::Error),

    /// Local keyed storage failure.
    #[error("storage error")]
    Storage(#[source] BoxError),
}

impl TutorHubError {
    /// Wrap a transport error.
    pub fn network(err: impl Into<BoxError>) -> Self {
        Self::Network(err.into())
    }

    /// Wrap a storage error.
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }
}

/// Form fields a [`ValidationError`] can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Subject,
    Domain,
    SubLevel,
    Duration,
    Fees,
    Discount,
    Token,
}

/// A single client-side validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("At least one subject is required")]
    NoSubjects,
    #[error("At least one domain is required")]
    NoDomains,
    #[error("At least one sublevel is required")]
    NoSubLevels,
    #[error("Duration is required")]
    MissingDuration,
    #[error("Duration must be 30, 60, 90 or 120 minutes")]
    UnsupportedDuration(String),
    #[error("Fees are required")]
    MissingFees,
    #[error("Fees must be a number")]
    FeesNotANumber,
    #[error("Fees must be a positive number")]
    FeesNotPositive,
    #[error("Discount is required")]
    MissingDiscount,
    #[error("Discount must be a number")]
    DiscountNotANumber,
    #[error("Discount must be a positive number")]
    DiscountNotPositive,
    #[error("Please select a domain first!")]
    DomainRequiredFirst,
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),
    #[error("Unknown sublevel: {0}")]
    UnknownSubLevel(String),
    #[error("Token is required")]
    EmptyToken,
}

impl ValidationError {
    /// The form field this error belongs to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NoSubjects | Self::UnknownSubject(_) => Field::Subject,
            Self::NoDomains | Self::UnknownDomain(_) => Field::Domain,
            Self::NoSubLevels | Self::DomainRequiredFirst | Self::UnknownSubLevel(_) => {
                Field::SubLevel
            }
            Self::MissingDuration | Self::UnsupportedDuration(_) => Field::Duration,
            Self::MissingFees | Self::FeesNotANumber | Self::FeesNotPositive => Field::Fees,
            Self::MissingDiscount | Self::DiscountNotANumber | Self::DiscountNotPositive => {
                Field::Discount
            }
            Self::EmptyToken => Field::Token,
        }
    }
}

/// Every validation failure found in one pass over a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// First error attached to `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|err| err.field() == field)
    }

    #[must_use]
    pub fn contains(&self, err: &ValidationError) -> bool {
        self.0.contains(err)
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was pushed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl From<ValidationError> for TutorHubError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.into())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            err.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Authentication failures detected client-side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("No token found. Please log in.")]
    MissingToken,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
