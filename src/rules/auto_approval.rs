use serde::{Deserialize, Serialize};

use super::capacity::capacity_percent;
use super::overlap::{inclusive_days, overlapping};
use crate::error::LeaveError;
use crate::model::{Employee, LeaveRecord, Project};

/// Lowest team capacity (percent) that still allows auto-approval.
pub const MIN_CAPACITY_PERCENT: i32 = 70;

/// Days before the start and after the end in which a deadline conflicts.
pub const DEADLINE_BUFFER_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOutcome {
    pub capacity_ok: bool,
    pub no_deadline_conflict: bool,
    pub sufficient_balance: bool,
}

impl RuleOutcome {
    pub fn all_pass(&self) -> bool {
        self.capacity_ok && self.no_deadline_conflict && self.sufficient_balance
    }
}

/// Recommendation for a reviewer. Evaluating never changes a record's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoApprovalResult {
    pub can_auto_approve: bool,
    pub rules: RuleOutcome,
    pub capacity_during_leave: i32,
    pub conflicting_deadlines: Vec<Project>,
}

/// Runs the capacity, deadline and balance rules for `request`.
///
/// The candidate itself is left out of the overlap query by id and counted
/// once by hand, whatever its current status.
pub fn evaluate(
    request: &LeaveRecord,
    employee: &Employee,
    all_requests: &[LeaveRecord],
    all_projects: &[Project],
    team_size: u32,
) -> Result<AutoApprovalResult, LeaveError> {
    if employee.id != request.employee_id {
        return Err(LeaveError::not_found("employee", &request.employee_id));
    }
    request.interval.validate()?;

    // capacity
    let others = overlapping(
        all_requests,
        request.start(),
        request.end(),
        Some(request.id.as_str()),
    )?;
    let on_leave = others.len() + 1;
    let capacity_during_leave = capacity_percent(team_size, on_leave)?;
    let capacity_ok = capacity_during_leave >= MIN_CAPACITY_PERCENT;

    // deadlines
    let window = request.interval.padded(DEADLINE_BUFFER_DAYS);
    let conflicting_deadlines: Vec<Project> = all_projects
        .iter()
        .filter(|p| window.contains(p.deadline) && p.is_assigned(&request.employee_id))
        .cloned()
        .collect();
    let no_deadline_conflict = conflicting_deadlines.is_empty();

    // balance
    let days = inclusive_days(request.start(), request.end())?;
    let sufficient_balance = employee.leave_balance.get(request.leave_type) >= days;

    let rules = RuleOutcome {
        capacity_ok,
        no_deadline_conflict,
        sufficient_balance,
    };

    tracing::debug!(
        request_id = %request.id,
        employee_id = %request.employee_id,
        on_leave,
        capacity_during_leave,
        conflicts = conflicting_deadlines.len(),
        days,
        can_auto_approve = rules.all_pass(),
        "Evaluated leave request"
    );

    Ok(AutoApprovalResult {
        can_auto_approve: rules.all_pass(),
        rules,
        capacity_during_leave,
        conflicting_deadlines,
    })
}
