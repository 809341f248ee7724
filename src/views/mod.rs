pub mod calendar;
pub mod dashboard;
pub mod deadlines;
pub mod reports;
pub mod workload;
