use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{Employee, LeaveRecord, LeaveStatus, LeaveType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTrend {
    pub department: String,
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalMix {
    /// Records that went through approval.
    pub auto_eligible: usize,
    /// Records still waiting or turned down.
    pub manual_review: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveReport {
    pub by_type: Vec<(LeaveType, usize)>,
    pub by_status: Vec<(LeaveStatus, usize)>,
    pub by_department: Vec<DepartmentTrend>,
    pub approval_mix: ApprovalMix,
}

pub fn leave_report(records: &[LeaveRecord], employees: &[Employee]) -> LeaveReport {
    let by_type = LeaveType::iter()
        .map(|t| (t, records.iter().filter(|lr| lr.leave_type == t).count()))
        .collect();

    let count_status = |s: LeaveStatus| records.iter().filter(|lr| lr.status == s).count();
    let by_status = [LeaveStatus::Approved, LeaveStatus::Pending, LeaveStatus::Rejected]
        .into_iter()
        .map(|s| (s, count_status(s)))
        .collect();

    let mut departments: Vec<&str> = Vec::new();
    for e in employees {
        if !departments.contains(&e.department.as_str()) {
            departments.push(&e.department);
        }
    }

    let by_department = departments
        .into_iter()
        .map(|dept| {
            let members: Vec<&str> = employees
                .iter()
                .filter(|e| e.department == dept)
                .map(|e| e.id.as_str())
                .collect();
            let theirs: Vec<&LeaveRecord> = records
                .iter()
                .filter(|lr| members.contains(&lr.employee_id.as_str()))
                .collect();
            DepartmentTrend {
                department: dept.to_string(),
                total: theirs.len(),
                approved: theirs.iter().filter(|lr| lr.status == LeaveStatus::Approved).count(),
                pending: theirs.iter().filter(|lr| lr.status == LeaveStatus::Pending).count(),
            }
        })
        .collect();

    let approved = count_status(LeaveStatus::Approved);
    LeaveReport {
        by_type,
        by_status,
        by_department,
        approval_mix: ApprovalMix {
            auto_eligible: approved,
            manual_review: records.len() - approved,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LeaveBalance, LeaveInterval};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn employee(id: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            avatar: "XX".to_string(),
            department: department.to_string(),
            title: "Engineer".to_string(),
            leave_balance: LeaveBalance::default(),
        }
    }

    fn record(id: &str, employee: &str, leave_type: LeaveType, status: LeaveStatus) -> LeaveRecord {
        let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee.to_string(),
            leave_type,
            interval: LeaveInterval::single_day(day),
            reason: "Personal errand".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            manager_comment: None,
        }
    }

    #[test]
    fn aggregates_by_type_status_and_department() {
        let employees = vec![
            employee("emp-1", "Engineering"),
            employee("emp-2", "Design"),
            employee("emp-3", "Engineering"),
            employee("emp-4", "Product"),
        ];
        let records = vec![
            record("lr-1", "emp-1", LeaveType::Sick, LeaveStatus::Approved),
            record("lr-2", "emp-2", LeaveType::Casual, LeaveStatus::Pending),
            record("lr-3", "emp-3", LeaveType::Casual, LeaveStatus::Rejected),
            record("lr-4", "emp-3", LeaveType::Earned, LeaveStatus::Pending),
        ];

        let report = leave_report(&records, &employees);
        assert_eq!(
            report.by_type,
            vec![(LeaveType::Sick, 1), (LeaveType::Casual, 2), (LeaveType::Earned, 1)]
        );
        assert_eq!(
            report.by_status,
            vec![
                (LeaveStatus::Approved, 1),
                (LeaveStatus::Pending, 2),
                (LeaveStatus::Rejected, 1)
            ]
        );

        let depts: Vec<&str> = report.by_department.iter().map(|t| t.department.as_str()).collect();
        assert_eq!(depts, vec!["Engineering", "Design", "Product"]);
        assert_eq!(
            report.by_department[0],
            DepartmentTrend {
                department: "Engineering".to_string(),
                total: 3,
                approved: 1,
                pending: 1,
            }
        );
        assert_eq!(report.by_department[2].total, 0);
        assert_eq!(
            report.approval_mix,
            ApprovalMix {
                auto_eligible: 1,
                manual_review: 3
            }
        );
    }
}
