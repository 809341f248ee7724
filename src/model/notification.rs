use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Approval,
    Rejection,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn unread(kind: NotificationKind, message: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("n-{}", Uuid::new_v4()),
            message,
            timestamp,
            read: false,
            kind,
        }
    }
}
