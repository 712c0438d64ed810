//! Resource descriptors — how each entity kind maps to backend endpoints.

use std::fmt;

use serde::de::DeserializeOwned;

use tutorhub_domain::availability::Availability;
use tutorhub_domain::city::City;
use tutorhub_domain::contract::Contract;
use tutorhub_domain::id::{
    AvailabilityId, CityId, ContractId, GradeLevelId, NotificationId, ServiceId, StudentId,
    SubjectId, UserId,
};
use tutorhub_domain::notification::Notification;
use tutorhub_domain::reference::{GradeLevel, Subject};
use tutorhub_domain::service::ServiceRecord;
use tutorhub_domain::student::Student;
use tutorhub_domain::teacher::Teacher;

use crate::ports::Method;
use crate::slice::Operation;
use crate::store::StoreSlot;

/// Whether a request needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

/// Method, path and access level of one backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub access: Access,
}

impl Endpoint {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, access: Access) -> Self {
        Self {
            method,
            path: path.into(),
            access,
        }
    }
}

/// An entity kind with its own slice and backend endpoints.
///
/// By default items live under `{COLLECTION_PATH}{id}/` and saves are a
/// `POST` to the collection; kinds with irregular routes override the
/// endpoint methods.
pub trait Resource: StoreSlot + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Identity used to upsert saved items into the collection.
    type Key: PartialEq + fmt::Display;

    /// Plural noun used in messages ("teachers").
    const PLURAL: &'static str;
    /// Singular noun used in messages ("teacher").
    const SINGULAR: &'static str;
    /// Collection path, with trailing slash.
    const COLLECTION_PATH: &'static str;
    const ACCESS: Access;

    fn key(&self) -> Self::Key;

    fn list_endpoint() -> Endpoint {
        Endpoint::new(Method::Get, Self::COLLECTION_PATH, Self::ACCESS)
    }

    fn item_endpoint(id: &str) -> Endpoint {
        Endpoint::new(
            Method::Get,
            format!("{}{id}/", Self::COLLECTION_PATH),
            Self::ACCESS,
        )
    }

    fn save_endpoint() -> Endpoint {
        Endpoint::new(Method::Post, Self::COLLECTION_PATH, Access::Bearer)
    }

    /// Message stored in the slice when the backend rejects `op`.
    #[must_use]
    fn failure_message(op: Operation) -> String {
        match op {
            Operation::FetchAll => format!("Failed to fetch {}", Self::PLURAL),
            Operation::FetchById => format!("Failed to fetch {}", Self::SINGULAR),
            Operation::Save => format!("Failed to save {}", Self::SINGULAR),
        }
    }
}

impl Resource for Teacher {
    type Key = UserId;
    const PLURAL: &'static str = "teachers";
    const SINGULAR: &'static str = "teacher";
    const COLLECTION_PATH: &'static str = "/api/teachers/";
    const ACCESS: Access = Access::Public;

    fn key(&self) -> UserId {
        self.user_id
    }

    fn list_endpoint() -> Endpoint {
        Endpoint::new(Method::Get, "/api/teachers/get-all-teachers/", Access::Public)
    }

    // The backend resolves the teacher from the bearer token, not from the id.
    fn item_endpoint(_id: &str) -> Endpoint {
        Endpoint::new(Method::Get, "/api/teachers/setup-profile", Access::Bearer)
    }

    fn save_endpoint() -> Endpoint {
        Endpoint::new(Method::Post, "/api/teachers/setup-profile", Access::Bearer)
    }
}

impl Resource for ServiceRecord {
    type Key = ServiceId;
    const PLURAL: &'static str = "services";
    const SINGULAR: &'static str = "service";
    const COLLECTION_PATH: &'static str = "/api/services/";
    const ACCESS: Access = Access::Bearer;

    fn key(&self) -> ServiceId {
        self.id
    }

    fn save_endpoint() -> Endpoint {
        Endpoint::new(Method::Post, "/api/teachers/setup-service", Access::Bearer)
    }
}

impl Resource for Subject {
    type Key = SubjectId;
    const PLURAL: &'static str = "subjects";
    const SINGULAR: &'static str = "subject";
    const COLLECTION_PATH: &'static str = "/api/subjects/";
    const ACCESS: Access = Access::Public;

    fn key(&self) -> SubjectId {
        self.id
    }
}

impl Resource for GradeLevel {
    type Key = GradeLevelId;
    const PLURAL: &'static str = "grade levels";
    const SINGULAR: &'static str = "grade level";
    const COLLECTION_PATH: &'static str = "/api/grade-levels/";
    const ACCESS: Access = Access::Public;

    fn key(&self) -> GradeLevelId {
        self.id
    }
}

impl Resource for Student {
    type Key = StudentId;
    const PLURAL: &'static str = "students";
    const SINGULAR: &'static str = "student";
    const COLLECTION_PATH: &'static str = "/api/students/";
    const ACCESS: Access = Access::Bearer;

    fn key(&self) -> StudentId {
        self.id
    }
}

impl Resource for Availability {
    type Key = AvailabilityId;
    const PLURAL: &'static str = "availability";
    const SINGULAR: &'static str = "availability slot";
    const COLLECTION_PATH: &'static str = "/api/availability/";
    const ACCESS: Access = Access::Bearer;

    fn key(&self) -> AvailabilityId {
        self.id
    }
}

impl Resource for City {
    type Key = CityId;
    const PLURAL: &'static str = "cities";
    const SINGULAR: &'static str = "city";
    const COLLECTION_PATH: &'static str = "/api/cities/";
    const ACCESS: Access = Access::Public;

    fn key(&self) -> CityId {
        self.id
    }
}

impl Resource for Contract {
    type Key = ContractId;
    const PLURAL: &'static str = "contracts";
    const SINGULAR: &'static str = "contract";
    const COLLECTION_PATH: &'static str = "/api/contracts/";
    const ACCESS: Access = Access::Bearer;

    fn key(&self) -> ContractId {
        self.id
    }
}

impl Resource for Notification {
    type Key = NotificationId;
    const PLURAL: &'static str = "notifications";
    const SINGULAR: &'static str = "notification";
    const COLLECTION_PATH: &'static str = "/api/notifications/";
    const ACCESS: Access = Access::Bearer;

    fn key(&self) -> NotificationId {
        self.id
    }
}
