use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::LeaveError;
use crate::model::{LeaveRecord, LeaveStatus, Project};
use crate::rules::{capacity_percent, on_day};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    /// Pending and approved leaves covering the day.
    pub leaves: Vec<&'a LeaveRecord>,
    pub deadlines: Vec<&'a Project>,
    /// Counts approved leaves only; absent on days nobody is away.
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar<'a> {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st in a week starting on Sunday.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay<'a>>,
}

pub fn month_calendar<'a>(
    year: i32,
    month: u32,
    records: &'a [LeaveRecord],
    projects: &'a [Project],
    team_size: u32,
) -> Result<MonthCalendar<'a>, LeaveError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(LeaveError::InvalidMonth { year, month })?;

    let mut days = Vec::with_capacity(31);
    for date in first.iter_days().take_while(|d| d.month() == month) {
        let leaves = on_day(records, date);
        let deadlines = projects.iter().filter(|p| p.deadline == date).collect();
        let capacity = if leaves.is_empty() {
            None
        } else {
            let approved = leaves
                .iter()
                .filter(|lr| lr.status == LeaveStatus::Approved)
                .count();
            Some(capacity_percent(team_size, approved)?)
        };
        days.push(CalendarDay {
            date,
            leaves,
            deadlines,
            capacity,
        });
    }

    Ok(MonthCalendar {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}
