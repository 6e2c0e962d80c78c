use crate::config::Schedule;
use crate::time::ClockTime;
use crate::{max, min};

impl Schedule {
    /// The portion of the day that counts as attended: the observed times
    /// clamped to the work window, with the lunch window excluded.
    ///
    /// A day without both readings counts as zero. The two subtractions are
    /// guarded by the comparisons, so they can never underflow.
    #[must_use]
    pub fn counted_duration(
        &self,
        start: Option<ClockTime>,
        end: Option<ClockTime>,
    ) -> ClockTime {
        let (Some(start), Some(end)) = (start, end) else {
            return ClockTime::default();
        };

        // attendance outside the work window never counts
        let effective_start = max!(start, self.work().start());
        let effective_end = min!(end, self.work().end());
        // the morning ends at the lunch break, or earlier if the trainee left
        let morning_end = min!(end, self.lunch().start());
        // the afternoon starts after the lunch break, or later if the trainee
        // arrived during or after it
        let afternoon_start = max!(start, self.lunch().end());

        let mut total = ClockTime::default();

        if morning_end > effective_start {
            total += morning_end - effective_start;
        }

        if afternoon_start < effective_end {
            total += effective_end - afternoon_start;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::clock_time;
    use crate::config::Schedule;
    use crate::time::ClockTime;

    // the default schedule: work 09:00 - 18:00, lunch 12:00 - 13:00

    #[test]
    fn test_full_day_is_work_window_minus_lunch() {
        let schedule = Schedule::default();
        let expected = (schedule.lunch().start() - schedule.work().start())
            + (schedule.work().end() - schedule.lunch().end());

        assert_eq!(
            schedule.counted_duration(
                Some(schedule.work().start()),
                Some(schedule.work().end())
            ),
            expected
        );
        assert_eq!(expected, clock_time!(08:00));
    }

    #[test]
    fn test_overshooting_readings_are_clamped() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(08:50)), Some(clock_time!(18:10))),
            clock_time!(08:00)
        );
    }

    #[test]
    fn test_morning_only() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(09:00)), Some(clock_time!(11:00))),
            clock_time!(02:00)
        );
    }

    #[test]
    fn test_afternoon_only() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(14:00)), Some(clock_time!(17:30))),
            clock_time!(03:30)
        );
    }

    #[test]
    fn test_leaving_during_lunch() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(09:00)), Some(clock_time!(12:30))),
            clock_time!(03:00)
        );
    }

    #[test]
    fn test_arriving_during_lunch() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(12:30)), Some(clock_time!(17:00))),
            clock_time!(04:00)
        );
    }

    #[test]
    fn test_exact_lunch_window_counts_nothing() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(12:00)), Some(clock_time!(13:00))),
            ClockTime::default()
        );
    }

    #[test]
    fn test_outside_the_work_window_counts_nothing() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(Some(clock_time!(07:00)), Some(clock_time!(08:30))),
            ClockTime::default()
        );
        assert_eq!(
            schedule.counted_duration(Some(clock_time!(18:30)), Some(clock_time!(19:00))),
            ClockTime::default()
        );
    }

    #[test]
    fn test_missing_readings_count_nothing() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.counted_duration(None, Some(clock_time!(17:00))),
            ClockTime::default()
        );
        assert_eq!(
            schedule.counted_duration(Some(clock_time!(09:00)), None),
            ClockTime::default()
        );
    }
}
