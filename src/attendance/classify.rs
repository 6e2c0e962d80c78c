use crate::attendance::AttendanceStatus;
use crate::config::Schedule;
use crate::time::ClockTime;

/// Judges tardiness and early leave against an arbitrary work window.
///
/// An unknown window bound makes any judgement impossible, so
/// [`AttendanceStatus::None`] is returned. Clocking in exactly at the window
/// start (or out exactly at its end) is on time; the judgement only flips one
/// minute past the bound.
#[must_use]
pub fn status_against(
    start: Option<ClockTime>,
    end: Option<ClockTime>,
    work_start: Option<ClockTime>,
    work_end: Option<ClockTime>,
) -> AttendanceStatus {
    let (Some(work_start), Some(work_end)) = (work_start, work_end) else {
        return AttendanceStatus::None;
    };

    let is_late = start.is_some_and(|start| start > work_start);
    let is_early = end.is_some_and(|end| end < work_end);

    AttendanceStatus::from_flags(is_late, is_early)
}

/// Judges against the organization-wide default schedule.
#[must_use]
pub fn default_status(start: Option<ClockTime>, end: Option<ClockTime>) -> AttendanceStatus {
    Schedule::DEFAULT.status(start, end)
}

impl Schedule {
    /// Judges against this schedule's work window.
    #[must_use]
    pub fn status(&self, start: Option<ClockTime>, end: Option<ClockTime>) -> AttendanceStatus {
        status_against(
            start,
            end,
            Some(self.work().start()),
            Some(self.work().end()),
        )
    }
}
