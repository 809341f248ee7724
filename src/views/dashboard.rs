use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LeaveError;
use crate::model::{Employee, LeaveBalance, LeaveRecord, LeaveStatus, Notification};
use crate::rules::{capacity_percent, on_day};

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSummary {
    pub pending: usize,
    pub on_leave_today: usize,
    pub available_today: i64,
    pub capacity_today: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary<'a> {
    pub employee_id: &'a str,
    pub balance: LeaveBalance,
    pub recent_requests: Vec<&'a LeaveRecord>,
    pub recent_notifications: &'a [Notification],
}

/// Only approved leaves count toward today's absence.
pub fn manager_summary(
    records: &[LeaveRecord],
    team_size: u32,
    today: NaiveDate,
) -> Result<ManagerSummary, LeaveError> {
    let on_leave_today = on_day(records, today)
        .into_iter()
        .filter(|lr| lr.status == LeaveStatus::Approved)
        .count();

    Ok(ManagerSummary {
        pending: records
            .iter()
            .filter(|lr| lr.status == LeaveStatus::Pending)
            .count(),
        on_leave_today,
        available_today: team_size as i64 - on_leave_today as i64,
        capacity_today: capacity_percent(team_size, on_leave_today)?,
    })
}

/// `records` and `notifications` are expected newest first.
pub fn employee_summary<'a>(
    employee: &'a Employee,
    records: &'a [LeaveRecord],
    notifications: &'a [Notification],
) -> EmployeeSummary<'a> {
    EmployeeSummary {
        employee_id: &employee.id,
        balance: employee.leave_balance,
        recent_requests: records
            .iter()
            .filter(|lr| lr.employee_id == employee.id)
            .take(RECENT_LIMIT)
            .collect(),
        recent_notifications: &notifications[..notifications.len().min(RECENT_LIMIT)],
    }
}
