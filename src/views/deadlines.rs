use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LeaveError;
use crate::model::{LeaveRecord, Project};
use crate::rules::overlapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn of(leaves: usize) -> Self {
        match leaves {
            0 => ImpactLevel::Low,
            1 => ImpactLevel::Medium,
            _ => ImpactLevel::High,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImpact<'a> {
    pub project: &'a Project,
    pub days_until: i64,
    /// Leaves of assigned employees between today and the deadline.
    pub leaves_near_deadline: Vec<&'a LeaveRecord>,
    pub impact: ImpactLevel,
}

/// Projects ordered by how soon they are due, ties in input order.
/// A deadline already behind `today` has no window left and reports no leaves.
pub fn project_impacts<'a>(
    records: &'a [LeaveRecord],
    projects: &'a [Project],
    today: NaiveDate,
) -> Result<Vec<ProjectImpact<'a>>, LeaveError> {
    let mut impacts = Vec::with_capacity(projects.len());

    for project in projects {
        let days_until = (project.deadline - today).num_days();
        let leaves_near_deadline: Vec<&LeaveRecord> = if days_until < 0 {
            Vec::new()
        } else {
            overlapping(records, today, project.deadline, None)?
                .into_iter()
                .filter(|lr| project.is_assigned(&lr.employee_id))
                .collect()
        };
        impacts.push(ProjectImpact {
            project,
            days_until,
            impact: ImpactLevel::of(leaves_near_deadline.len()),
            leaves_near_deadline,
        });
    }

    impacts.sort_by_key(|i| i.days_until);
    Ok(impacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LeaveInterval, LeaveStatus, LeaveType, Priority};
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(
        id: &str,
        employee: &str,
        start: &str,
        end: &str,
        status: LeaveStatus,
    ) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee.to_string(),
            leave_type: LeaveType::Sick,
            interval: LeaveInterval::new(d(start), d(end)).unwrap(),
            reason: "Medical appointment".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 2, 19, 9, 0, 0).unwrap(),
            manager_comment: None,
        }
    }

    fn project(id: &str, deadline: &str, assigned: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_string(),
            deadline: d(deadline),
            assigned_employees: assigned.iter().map(|s| s.to_string()).collect(),
            priority: Priority::High,
        }
    }

    #[test]
    fn impact_levels_and_order() {
        let records = vec![
            record("a", "emp-1", "2026-02-23", "2026-02-24", LeaveStatus::Pending),
            record("b", "emp-2", "2026-02-26", "2026-02-27", LeaveStatus::Approved),
            record("c", "emp-3", "2026-02-25", "2026-02-26", LeaveStatus::Rejected),
            record("d", "emp-4", "2026-04-01", "2026-04-02", LeaveStatus::Approved),
        ];
        let projects = vec![
            project("late", "2026-03-20", &["emp-4"]),
            project("soon", "2026-02-28", &["emp-1", "emp-2", "emp-3"]),
            project("mid", "2026-03-05", &["emp-2"]),
        ];

        let impacts = project_impacts(&records, &projects, d("2026-02-20")).unwrap();
        let order: Vec<&str> = impacts.iter().map(|i| i.project.id.as_str()).collect();
        assert_eq!(order, vec!["soon", "mid", "late"]);

        assert_eq!(impacts[0].days_until, 8);
        assert_eq!(impacts[0].leaves_near_deadline.len(), 2);
        assert_eq!(impacts[0].impact, ImpactLevel::High);
        assert_eq!(impacts[1].impact, ImpactLevel::Medium);
        // leave after the deadline does not count
        assert_eq!(impacts[2].impact, ImpactLevel::Low);
    }

    #[test]
    fn past_deadline_reports_no_leaves() {
        let records = vec![record("a", "emp-1", "2026-02-01", "2026-03-01", LeaveStatus::Approved)];
        let projects = vec![project("done", "2026-02-10", &["emp-1"])];
        let impacts = project_impacts(&records, &projects, d("2026-02-20")).unwrap();
        assert_eq!(impacts[0].days_until, -10);
        assert!(impacts[0].leaves_near_deadline.is_empty());
        assert_eq!(impacts[0].impact, ImpactLevel::Low);
    }
}
