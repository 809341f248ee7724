use chrono::NaiveDate;

use crate::error::LeaveError;
use crate::model::{LeaveInterval, LeaveRecord};

/// Records whose interval shares at least one day with
/// `[window_start, window_end]`.
///
/// Rejected records and the record named by `exclude_id` never match.
/// Results keep the input order.
pub fn overlapping<'a>(
    records: &'a [LeaveRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
    exclude_id: Option<&str>,
) -> Result<Vec<&'a LeaveRecord>, LeaveError> {
    let window = LeaveInterval::new(window_start, window_end)?;

    Ok(records
        .iter()
        .filter(|lr| exclude_id != Some(lr.id.as_str()))
        .filter(|lr| !lr.is_rejected())
        .filter(|lr| lr.interval.intersects(&window))
        .collect())
}

/// Leaves covering a single calendar day.
pub fn on_day(records: &[LeaveRecord], day: NaiveDate) -> Vec<&LeaveRecord> {
    let window = LeaveInterval::single_day(day);
    records
        .iter()
        .filter(|lr| !lr.is_rejected() && lr.interval.intersects(&window))
        .collect()
}

/// Inclusive day count: a leave that starts and ends on the same date is 1 day.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Result<u32, LeaveError> {
    LeaveInterval::new(start, end)?;
    // end >= start, so the difference is never negative
    Ok((end - start).num_days() as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LeaveStatus, LeaveType};
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str, start: &str, end: &str, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: format!("emp-{id}"),
            leave_type: LeaveType::Casual,
            interval: LeaveInterval::new(d(start), d(end)).unwrap(),
            reason: "test".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            manager_comment: None,
        }
    }

    fn ids(found: Vec<&LeaveRecord>) -> Vec<&str> {
        found.into_iter().map(|lr| lr.id.as_str()).collect()
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let records = vec![record("a", "2026-02-10", "2026-02-11", LeaveStatus::Approved)];
        let found = overlapping(&records, d("2026-02-12"), d("2026-02-14"), None).unwrap();
        assert!(found.is_empty());
        let found = overlapping(&records, d("2026-02-01"), d("2026-02-09"), None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn touching_boundary_day_overlaps() {
        let records = vec![record("a", "2026-02-10", "2026-02-11", LeaveStatus::Approved)];
        let found = overlapping(&records, d("2026-02-11"), d("2026-02-12"), None).unwrap();
        assert_eq!(ids(found), vec!["a"]);
        let found = overlapping(&records, d("2026-02-08"), d("2026-02-10"), None).unwrap();
        assert_eq!(ids(found), vec!["a"]);
    }

    #[test]
    fn single_day_window_matches_single_day_leave() {
        let records = vec![record("a", "2026-02-10", "2026-02-10", LeaveStatus::Pending)];
        let found = overlapping(&records, d("2026-02-10"), d("2026-02-10"), None).unwrap();
        assert_eq!(ids(found), vec!["a"]);
    }

    #[test]
    fn record_containing_window_matches() {
        let records = vec![record("a", "2026-02-01", "2026-02-28", LeaveStatus::Approved)];
        let found = overlapping(&records, d("2026-02-10"), d("2026-02-12"), None).unwrap();
        assert_eq!(ids(found), vec!["a"]);
    }

    #[test]
    fn rejected_records_never_match() {
        let records = vec![
            record("a", "2026-02-10", "2026-02-11", LeaveStatus::Rejected),
            record("b", "2026-02-10", "2026-02-11", LeaveStatus::Pending),
        ];
        let found = overlapping(&records, d("2026-02-10"), d("2026-02-11"), None).unwrap();
        assert_eq!(ids(found), vec!["b"]);
        assert_eq!(ids(on_day(&records, d("2026-02-10"))), vec!["b"]);
    }

    #[test]
    fn exclude_id_removes_only_that_record() {
        let records = vec![
            record("a", "2026-02-10", "2026-02-11", LeaveStatus::Pending),
            record("b", "2026-02-10", "2026-02-11", LeaveStatus::Approved),
            record("c", "2026-02-11", "2026-02-11", LeaveStatus::Pending),
        ];
        let found = overlapping(&records, d("2026-02-10"), d("2026-02-11"), Some("b")).unwrap();
        assert_eq!(ids(found), vec!["a", "c"]);
    }

    #[test]
    fn results_keep_input_order() {
        let records = vec![
            record("z", "2026-02-10", "2026-02-10", LeaveStatus::Approved),
            record("a", "2026-02-09", "2026-02-12", LeaveStatus::Approved),
            record("m", "2026-02-10", "2026-02-15", LeaveStatus::Pending),
        ];
        let first = ids(overlapping(&records, d("2026-02-10"), d("2026-02-10"), None).unwrap());
        let second = ids(overlapping(&records, d("2026-02-10"), d("2026-02-10"), None).unwrap());
        assert_eq!(first, vec!["z", "a", "m"]);
        assert_eq!(first, second);
    }

    #[test]
    fn reversed_window_is_rejected() {
        let records = vec![record("a", "2026-02-10", "2026-02-11", LeaveStatus::Approved)];
        let err = overlapping(&records, d("2026-02-12"), d("2026-02-10"), None).unwrap_err();
        assert!(matches!(err, LeaveError::InvalidRange { .. }));
    }

    #[test]
    fn inclusive_day_counts() {
        assert_eq!(inclusive_days(d("2026-02-10"), d("2026-02-10")).unwrap(), 1);
        assert_eq!(inclusive_days(d("2026-02-10"), d("2026-02-11")).unwrap(), 2);
        assert_eq!(inclusive_days(d("2026-02-27"), d("2026-03-02")).unwrap(), 4);
        assert!(inclusive_days(d("2026-02-11"), d("2026-02-10")).is_err());
    }
}
