//! City — reference list used for profiles and filtering.

use serde::{Deserialize, Serialize};

use crate::id::CityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
}
