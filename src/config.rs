use std::path::Path;

use serde::Deserialize;

use crate::clock_time;
use crate::time::TimeWindow;
use crate::utils;

/// The process-wide schedule constants: the official work window and the
/// lunch window excluded from counted time.
///
/// Read-only after loading. A config file may override either window, the
/// rest falls back to [`Schedule::DEFAULT`]:
///
/// ```toml
/// [work]
/// start = "08:30"
/// end = "17:30"
///
/// [lunch]
/// start = "12:00"
/// end = "12:45"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    #[serde(default = "default_work")]
    work: TimeWindow,
    #[serde(default = "default_lunch")]
    lunch: TimeWindow,
}

fn default_work() -> TimeWindow {
    Schedule::DEFAULT.work
}

fn default_lunch() -> TimeWindow {
    Schedule::DEFAULT.lunch
}

impl Schedule {
    /// The fixed organization-wide schedule.
    pub const DEFAULT: Self = Self {
        work: TimeWindow::new(clock_time!(09:00), clock_time!(18:00)),
        lunch: TimeWindow::new(clock_time!(12:00), clock_time!(13:00)),
    };

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(toml::from_str(&utils::read_to_string(path)?)?)
    }

    #[must_use]
    pub const fn work(&self) -> TimeWindow {
        self.work
    }

    #[must_use]
    pub const fn lunch(&self) -> TimeWindow {
        self.lunch
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_the_default() {
        let schedule: Schedule = toml::from_str("").unwrap();

        assert_eq!(schedule, Schedule::DEFAULT);
    }

    #[test]
    fn test_partial_config_overrides_one_window() {
        let schedule: Schedule =
            toml::from_str("[lunch]\nstart = \"11:30\"\nend = \"12:15\"\n").unwrap();

        assert_eq!(schedule.work(), Schedule::DEFAULT.work());
        assert_eq!(schedule.lunch().start(), clock_time!(11:30));
        assert_eq!(schedule.lunch().end(), clock_time!(12:15));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<Schedule, _> = toml::from_str("[dinner]\nstart = \"19:00\"\n");

        assert!(result.is_err());
    }
}
