use chrono::{Local, NaiveDate};

/// The persisted course calendar.
///
/// Whether a date is a scheduled training day is answered by the host
/// application (it owns the section data); this crate only consumes the
/// answer.
pub trait TrainingCalendar {
    fn is_workday(&self, course_id: u32, date: NaiveDate) -> bool;
}

/// Today's date with the time of day dropped: every call on the same
/// calendar day returns the same value.
#[must_use]
pub fn training_date() -> NaiveDate {
    Local::now().date_naive()
}
