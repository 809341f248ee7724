use crate::error::LeaveError;

/// Share of the team still working, as a whole percentage.
///
/// Halves round up, so 62.5 reports as 63. The value goes negative when more
/// people are away than the team has.
pub fn capacity_percent(team_size: u32, on_leave: usize) -> Result<i32, LeaveError> {
    if team_size == 0 {
        return Err(LeaveError::InvalidTeamSize);
    }
    let available = team_size as f64 - on_leave as f64;
    let percent = available / team_size as f64 * 100.0;
    Ok((percent + 0.5).floor() as i32)
}
