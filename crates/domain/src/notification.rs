//! Notification — a message addressed to the logged-in user.

use serde::{Deserialize, Serialize};

use crate::id::NotificationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    #[serde(default)]
    pub read: bool,
}
