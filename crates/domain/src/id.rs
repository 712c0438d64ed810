//! Typed identifier newtypes backed by the backend's integer keys.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw backend key.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Access the raw backend key.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`User`](crate::user::User); teachers are keyed by it.
    UserId
);

define_id!(
    /// Identifier of a [`Subject`](crate::reference::Subject).
    SubjectId
);

define_id!(
    /// Identifier of a [`GradeLevel`](crate::reference::GradeLevel).
    GradeLevelId
);

define_id!(
    /// Identifier of a saved [`ServiceRecord`](crate::service::ServiceRecord).
    ServiceId
);

define_id!(
    /// Identifier of a [`Student`](crate::student::Student).
    StudentId
);

define_id!(
    /// Identifier of an [`Availability`](crate::availability::Availability) slot.
    AvailabilityId
);

define_id!(
    /// Identifier of a [`City`](crate::city::City).
    CityId
);

define_id!(
    /// Identifier of a [`Contract`](crate::contract::Contract).
    ContractId
);

define_id!(
    /// Identifier of a [`Notification`](crate::notification::Notification).
    NotificationId
);
