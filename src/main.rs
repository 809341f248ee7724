use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Serialize;
use tracing::info;
use tracing_appender::rolling;

use leave_desk::config::Config;
use leave_desk::model::Project;
use leave_desk::views::calendar::{self, MonthCalendar};
use leave_desk::views::dashboard::{self, ManagerSummary};
use leave_desk::views::deadlines::{self, ProjectImpact};
use leave_desk::views::reports::{self, LeaveReport};
use leave_desk::views::workload::{self, DailyCapacity};
use leave_desk::{LeaveDesk, PendingReview, Snapshot};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewDigest<'a> {
    review_date: chrono::NaiveDate,
    pending_reviews: Vec<PendingReview<'a>>,
    manager: ManagerSummary,
    calendar: MonthCalendar<'a>,
    workload: Vec<DailyCapacity>,
    heatmap: Vec<Vec<DailyCapacity>>,
    deadline_overlaps: Vec<&'a Project>,
    project_impacts: Vec<ProjectImpact<'a>>,
    report: LeaveReport,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "leave-desk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(data_file = %config.data_file.display(), "Leave desk starting...");

    let snapshot = Snapshot::load(&config.data_file)?;
    let desk = LeaveDesk::new(snapshot).context("Snapshot failed validation")?;

    let today = config.review_date;
    let records = desk.requests();
    let projects = desk.projects();
    let team_size = desk.team_size();

    let digest = ReviewDigest {
        review_date: today,
        pending_reviews: desk.pending_reviews()?,
        manager: dashboard::manager_summary(records, team_size, today)?,
        calendar: calendar::month_calendar(
            today.year(),
            today.month(),
            records,
            projects,
            team_size,
        )?,
        workload: workload::capacity_series(records, team_size, today, config.workload_days)?,
        heatmap: workload::heatmap(records, team_size, today, config.heatmap_weeks)?,
        deadline_overlaps: workload::deadline_overlaps(records, projects)?,
        project_impacts: deadlines::project_impacts(records, projects, today)?,
        report: reports::leave_report(records, desk.employees()),
    };

    println!("{}", serde_json::to_string_pretty(&digest)?);
    info!(pending = digest.pending_reviews.len(), "Review digest written");

    Ok(())
}
