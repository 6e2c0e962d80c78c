mod utils;

pub mod attendance;
pub mod calendar;
pub mod config;
pub mod form;
pub mod time;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::attendance::AttendanceStatus;
use crate::config::Schedule;
use crate::time::ClockTime;

/// One evaluated training day: the judgement and the counted time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAttendance {
    date: NaiveDate,
    status: AttendanceStatus,
    counted: ClockTime,
}

impl DayAttendance {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    #[must_use]
    pub fn counted(&self) -> ClockTime {
        self.counted
    }
}

/// Evaluates one day's clock-in/clock-out readings against the schedule.
pub fn evaluate_day(
    schedule: &Schedule,
    date: NaiveDate,
    start: Option<ClockTime>,
    end: Option<ClockTime>,
) -> DayAttendance {
    let status = schedule.status(start, end);
    let counted = schedule.counted_duration(start, end);

    info!("{}: {}, counted {}", date, status, counted);

    DayAttendance {
        date,
        status,
        counted,
    }
}
