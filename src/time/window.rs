use derive_more::Display;
use serde::Deserialize;
use thiserror::Error;

use crate::time::ClockTime;

/// A fixed schedule window, like the official working day or the lunch break.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Deserialize)]
#[display("{start} - {end}")]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    start: ClockTime,
    end: ClockTime,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("window starts after it ends: {start} - {end}")]
pub struct InvalidTimeWindow {
    start: ClockTime,
    end: ClockTime,
}

#[derive(Debug, Deserialize)]
struct RawTimeWindow {
    start: ClockTime,
    end: ClockTime,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        if start.as_minutes() > end.as_minutes() {
            panic!("window starts after it ends");
        }

        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = InvalidTimeWindow;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        if raw.start > raw.end {
            return Err(InvalidTimeWindow {
                start: raw.start,
                end: raw.end,
            });
        }

        Ok(Self {
            start: raw.start,
            end: raw.end,
        })
    }
}
