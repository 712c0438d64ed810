//! Student — a learner browsing teachers.

use serde::{Deserialize, Serialize};

use crate::id::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
}
