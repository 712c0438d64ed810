//! Teacher — a tutor profile as returned by the backend.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::reference::{GradeLevel, Subject};

/// Country prefix substituted for a leading `0` in local phone numbers.
pub const DEFAULT_COUNTRY_PREFIX: &str = "+92";

/// A teacher profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub sub_levels: Vec<GradeLevel>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub duration_per_session: Option<u32>,
}

impl Teacher {
    /// Minimal profile with only identity and name.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: None,
            phone_number: None,
            city_name: None,
            profile_picture: None,
            subjects: Vec::new(),
            domains: Vec::new(),
            sub_levels: Vec::new(),
            hourly_rate: None,
            duration_per_session: None,
        }
    }

    /// Subject names in profile order.
    #[must_use]
    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }

    /// Sub-level names in profile order.
    #[must_use]
    pub fn sub_level_names(&self) -> Vec<String> {
        self.sub_levels.iter().map(|l| l.sub_level.clone()).collect()
    }

    /// Phone number in international format, if one is set.
    #[must_use]
    pub fn international_phone(&self) -> Option<String> {
        self.phone_number
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
            .map(to_international_format)
    }

    /// `wa.me` chat link built from the international phone number.
    #[must_use]
    pub fn whatsapp_url(&self) -> Option<String> {
        self.international_phone()
            .map(|phone| format!("https://wa.me/{phone}"))
    }
}

/// Replace a leading `0` with [`DEFAULT_COUNTRY_PREFIX`].
///
/// Numbers already carrying the prefix, or not starting with `0`, are
/// returned unchanged.
#[must_use]
pub fn to_international_format(phone: &str) -> String {
    let phone = phone.trim();
    if !phone.starts_with(DEFAULT_COUNTRY_PREFIX)
        && let Some(rest) = phone.strip_prefix('0')
    {
        return format!("{DEFAULT_COUNTRY_PREFIX}{rest}");
    }
    phone.to_string()
}
