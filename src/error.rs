use chrono::NaiveDate;
use derive_more::Display;

use crate::model::leave_request::LeaveStatus;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LeaveError {
    /// `end` falls before `start`
    #[display(fmt = "invalid range: end {} is before start {}", end, start)]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[display(fmt = "team size must be positive")]
    InvalidTeamSize,

    #[display(fmt = "duplicate leave request id `{}`", id)]
    DuplicateId { id: String },

    #[display(fmt = "{} `{}` not found", entity, id)]
    NotFound { entity: &'static str, id: String },

    /// Leave request is already Approved or Rejected
    #[display(fmt = "leave request `{}` already processed ({})", id, status)]
    AlreadyProcessed { id: String, status: LeaveStatus },

    #[display(fmt = "leave request `{}` cannot move to {}", id, to)]
    InvalidTransition { id: String, to: LeaveStatus },

    #[display(fmt = "a reason is required")]
    MissingReason,

    #[display(fmt = "invalid month {}-{}", year, month)]
    InvalidMonth { year: i32, month: u32 },
}

impl std::error::Error for LeaveError {}

impl LeaveError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        LeaveError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
