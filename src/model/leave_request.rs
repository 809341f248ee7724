use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::LeaveError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum LeaveType {
    Sick,
    Casual,
    Earned,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Approved and Rejected never change again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// Calendar date range with both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveInterval {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl LeaveInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LeaveError> {
        if end < start {
            return Err(LeaveError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Re-checks ordering for intervals that arrived through deserialization.
    pub fn validate(&self) -> Result<(), LeaveError> {
        Self::new(self.start, self.end).map(|_| ())
    }

    pub fn intersects(&self, other: &LeaveInterval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Widens the interval by `days` on both sides, stopping at the ends of
    /// the calendar.
    pub fn padded(&self, days: i64) -> Self {
        Self {
            start: shift_days(self.start, -days),
            end: shift_days(self.end, days),
        }
    }
}

/// `date` moved by `days`, clamped to `NaiveDate::MIN..=NaiveDate::MAX`.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: String,
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[serde(flatten)]
    pub interval: LeaveInterval,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_comment: Option<String>,
}

impl LeaveRecord {
    pub fn start(&self) -> NaiveDate {
        self.interval.start
    }

    pub fn end(&self) -> NaiveDate {
        self.interval.end
    }

    pub fn is_rejected(&self) -> bool {
        self.status == LeaveStatus::Rejected
    }
}
