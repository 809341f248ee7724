use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::LeaveError;
use crate::model::{
    Employee, LeaveInterval, LeaveRecord, LeaveStatus, LeaveType, Notification, NotificationKind,
    Project,
};
use crate::rules::{self, AutoApprovalResult, inclusive_days};

/// Everything the desk owns, in the shape it is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub team_size: u32,
    pub employees: Vec<Employee>,
    pub leave_requests: Vec<LeaveRecord>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeave {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveFilter {
    pub employee_id: Option<String>,
    pub status: Option<LeaveStatus>,
    /// 1-based
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveList {
    pub data: Vec<LeaveRecord>,
    pub page: u64,
    pub per_page: u64,
    pub total: usize,
}

/// A pending request as shown on the manager review screen.
#[derive(Debug, Clone, Serialize)]
pub struct PendingReview<'a> {
    pub request: &'a LeaveRecord,
    pub employee: &'a Employee,
    pub evaluation: AutoApprovalResult,
}

/// Owns the records, balances and notification feed and applies every
/// state change. Rule evaluation reads the current state but never writes it.
#[derive(Debug, Clone)]
pub struct LeaveDesk {
    team_size: u32,
    employees: Vec<Employee>,
    requests: Vec<LeaveRecord>,
    projects: Vec<Project>,
    notifications: Vec<Notification>,
}

impl LeaveDesk {
    pub fn new(snapshot: Snapshot) -> Result<Self, LeaveError> {
        if snapshot.team_size == 0 {
            return Err(LeaveError::InvalidTeamSize);
        }

        let mut seen = HashSet::new();
        for lr in &snapshot.leave_requests {
            if !seen.insert(lr.id.as_str()) {
                return Err(LeaveError::DuplicateId { id: lr.id.clone() });
            }
            lr.interval.validate()?;
            if !snapshot.employees.iter().any(|e| e.id == lr.employee_id) {
                return Err(LeaveError::not_found("employee", &lr.employee_id));
            }
        }

        info!(
            team_size = snapshot.team_size,
            employees = snapshot.employees.len(),
            requests = snapshot.leave_requests.len(),
            projects = snapshot.projects.len(),
            "Leave desk loaded"
        );

        Ok(Self {
            team_size: snapshot.team_size,
            employees: snapshot.employees,
            requests: snapshot.leave_requests,
            projects: snapshot.projects,
            notifications: snapshot.notifications,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            team_size: self.team_size,
            employees: self.employees.clone(),
            leave_requests: self.requests.clone(),
            projects: self.projects.clone(),
            notifications: self.notifications.clone(),
        }
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Newest first.
    pub fn requests(&self) -> &[LeaveRecord] {
        &self.requests
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn employee(&self, id: &str) -> Result<&Employee, LeaveError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| LeaveError::not_found("employee", id))
    }

    pub fn request(&self, id: &str) -> Result<&LeaveRecord, LeaveError> {
        self.requests
            .iter()
            .find(|lr| lr.id == id)
            .ok_or_else(|| LeaveError::not_found("leave request", id))
    }

    /* =========================
    Submit leave request
    ========================= */
    pub fn submit_request(&mut self, new: NewLeave) -> Result<&LeaveRecord, LeaveError> {
        self.employee(&new.employee_id)?;
        let interval = LeaveInterval::new(new.start_date, new.end_date)?;
        let reason = new.reason.trim();
        if reason.is_empty() {
            return Err(LeaveError::MissingReason);
        }

        let now = Utc::now();
        let record = LeaveRecord {
            id: format!("lr-{}", Uuid::new_v4()),
            employee_id: new.employee_id,
            leave_type: new.leave_type,
            interval,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
            created_at: now,
            manager_comment: None,
        };

        let message = format!(
            "Leave request ({}) submitted for {} to {}",
            record.leave_type, interval.start, interval.end
        );
        self.notifications
            .insert(0, Notification::unread(NotificationKind::Info, message, now));

        info!(
            request_id = %record.id,
            employee_id = %record.employee_id,
            leave_type = %record.leave_type,
            start = %interval.start,
            end = %interval.end,
            "Leave request submitted"
        );

        self.requests.insert(0, record);
        Ok(&self.requests[0])
    }

    /* =========================
    Approve / reject
    ========================= */
    /// Moves a Pending request to Approved or Rejected. The first transition
    /// wins; any later attempt fails with `AlreadyProcessed`.
    pub fn set_status(
        &mut self,
        id: &str,
        status: LeaveStatus,
        comment: Option<&str>,
    ) -> Result<&LeaveRecord, LeaveError> {
        let idx = self
            .requests
            .iter()
            .position(|lr| lr.id == id)
            .ok_or_else(|| LeaveError::not_found("leave request", id))?;

        let current = self.requests[idx].status;
        if current.is_terminal() {
            warn!(request_id = id, status = %current, "Leave request already processed");
            return Err(LeaveError::AlreadyProcessed {
                id: id.to_string(),
                status: current,
            });
        }
        if status == LeaveStatus::Pending {
            return Err(LeaveError::InvalidTransition {
                id: id.to_string(),
                to: status,
            });
        }

        let employee_id = self.requests[idx].employee_id.clone();
        let emp_idx = self
            .employees
            .iter()
            .position(|e| e.id == employee_id)
            .ok_or_else(|| LeaveError::not_found("employee", &employee_id))?;
        let days = inclusive_days(self.requests[idx].start(), self.requests[idx].end())?;

        let record = &mut self.requests[idx];
        record.status = status;
        if let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) {
            record.manager_comment = Some(comment.to_string());
        }
        let leave_type = record.leave_type;

        let employee = &mut self.employees[emp_idx];
        let kind = if status == LeaveStatus::Approved {
            employee.leave_balance.deduct(leave_type, days);
            NotificationKind::Approval
        } else {
            NotificationKind::Rejection
        };

        let message = format!(
            "{}'s leave request was {}",
            employee.name,
            status.as_ref().to_lowercase()
        );
        self.notifications
            .insert(0, Notification::unread(kind, message, Utc::now()));

        info!(
            request_id = id,
            employee_id = %employee_id,
            status = %status,
            days,
            "Leave request processed"
        );

        Ok(&self.requests[idx])
    }

    pub fn approve(&mut self, id: &str, comment: Option<&str>) -> Result<&LeaveRecord, LeaveError> {
        self.set_status(id, LeaveStatus::Approved, comment)
    }

    pub fn reject(&mut self, id: &str, comment: Option<&str>) -> Result<&LeaveRecord, LeaveError> {
        self.set_status(id, LeaveStatus::Rejected, comment)
    }

    /* =========================
    Review
    ========================= */
    pub fn evaluate(&self, id: &str) -> Result<AutoApprovalResult, LeaveError> {
        let request = self.request(id)?;
        let employee = self.employee(&request.employee_id)?;
        rules::evaluate(request, employee, &self.requests, &self.projects, self.team_size)
    }

    pub fn pending_reviews(&self) -> Result<Vec<PendingReview<'_>>, LeaveError> {
        self.requests
            .iter()
            .filter(|lr| lr.status == LeaveStatus::Pending)
            .map(|request| -> Result<PendingReview<'_>, LeaveError> {
                let employee = self.employee(&request.employee_id)?;
                let evaluation = rules::evaluate(
                    request,
                    employee,
                    &self.requests,
                    &self.projects,
                    self.team_size,
                )?;
                Ok(PendingReview {
                    request,
                    employee,
                    evaluation,
                })
            })
            .collect()
    }

    /* =========================
    Listing
    ========================= */
    pub fn list(&self, filter: &LeaveFilter) -> LeaveList {
        let per_page = filter.per_page.unwrap_or(10).clamp(1, 100);
        let page = filter.page.unwrap_or(1).max(1);
        let offset = usize::try_from(page.saturating_sub(1).saturating_mul(per_page))
            .unwrap_or(usize::MAX);

        let mut matching: Vec<&LeaveRecord> = self
            .requests
            .iter()
            .filter(|lr| {
                filter
                    .employee_id
                    .as_deref()
                    .is_none_or(|id| lr.employee_id == id)
            })
            .filter(|lr| filter.status.is_none_or(|s| lr.status == s))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let data = matching
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();

        LeaveList {
            data,
            page,
            per_page,
            total,
        }
    }

    /* =========================
    Notifications
    ========================= */
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }
}
