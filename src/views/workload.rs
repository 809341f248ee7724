use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::LeaveError;
use crate::model::{LeaveRecord, LeaveStatus, Project, shift_days};
use crate::rules::{DEADLINE_BUFFER_DAYS, capacity_percent, on_day, overlapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CapacityBand {
    Comfortable,
    Healthy,
    Strained,
    Critical,
}

impl CapacityBand {
    pub fn of(capacity: i32) -> Self {
        match capacity {
            c if c >= 90 => CapacityBand::Comfortable,
            c if c >= 70 => CapacityBand::Healthy,
            c if c >= 50 => CapacityBand::Strained,
            _ => CapacityBand::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCapacity {
    pub date: NaiveDate,
    pub on_leave: usize,
    pub available: i64,
    pub capacity: i32,
    pub band: CapacityBand,
}

fn daily(
    records: &[LeaveRecord],
    team_size: u32,
    date: NaiveDate,
) -> Result<DailyCapacity, LeaveError> {
    let on_leave = on_day(records, date).len();
    let capacity = capacity_percent(team_size, on_leave)?;
    Ok(DailyCapacity {
        date,
        on_leave,
        available: team_size as i64 - on_leave as i64,
        capacity,
        band: CapacityBand::of(capacity),
    })
}

/// Pending and approved headcount for `days` consecutive days from `from`.
pub fn capacity_series(
    records: &[LeaveRecord],
    team_size: u32,
    from: NaiveDate,
    days: u32,
) -> Result<Vec<DailyCapacity>, LeaveError> {
    from.iter_days()
        .take(days as usize)
        .map(|date| daily(records, team_size, date))
        .collect()
}

/// `weeks` rows of seven days, starting on the Sunday on or before `today`.
pub fn heatmap(
    records: &[LeaveRecord],
    team_size: u32,
    today: NaiveDate,
    weeks: u32,
) -> Result<Vec<Vec<DailyCapacity>>, LeaveError> {
    let week_start = shift_days(today, -(today.weekday().num_days_from_sunday() as i64));
    (0..weeks)
        .map(|w| capacity_series(records, team_size, shift_days(week_start, 7 * w as i64), 7))
        .collect()
}

/// Projects where an assigned employee has a pending leave in the days
/// leading up to the deadline.
pub fn deadline_overlaps<'a>(
    records: &[LeaveRecord],
    projects: &'a [Project],
) -> Result<Vec<&'a Project>, LeaveError> {
    let pending: Vec<LeaveRecord> = records
        .iter()
        .filter(|lr| lr.status == LeaveStatus::Pending)
        .cloned()
        .collect();

    let mut flagged = Vec::new();
    for project in projects {
        let near = overlapping(
            &pending,
            shift_days(project.deadline, -DEADLINE_BUFFER_DAYS),
            project.deadline,
            None,
        )?;
        if near.iter().any(|lr| project.is_assigned(&lr.employee_id)) {
            flagged.push(project);
        }
    }
    Ok(flagged)
}
