use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

/// A quantity of hours and minutes, used both for a time of day and for a
/// counted duration.
///
/// A reading that was never recorded is `Option::<ClockTime>::None`, so the
/// comparison and arithmetic below only ever see recorded values.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    // the display format has two hour digits, so the
    // largest representable value is 99:59 = 99 * 60 + 59
    const MAX_MINUTES: u16 = 99 * 60 + 59;

    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidClockTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidClockTime { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    /// Splits a raw minute count into hours and minutes, for example a
    /// "minutes of break taken" input.
    #[must_use]
    pub fn from_minutes(minutes: u16) -> Self {
        assert!(
            minutes <= Self::MAX_MINUTES,
            "{} minutes do not fit into two hour digits",
            minutes
        );

        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn from_parts(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    // the maximum ClockTime is 99:59, which would be 99 * 60 + 59 = 5999
    // u16::MAX is 2^16 - 1 = 65535
    #[must_use]
    pub(crate) const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Subtracts `other`, returning `None` if `other` is the later value.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.as_minutes()
            .checked_sub(other.as_minutes())
            .map(Self::from_minutes)
    }

    #[must_use]
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs(self.as_minutes() as u64 * 60)
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self { hour: 0, minute: 0 }
    }
}

impl From<ClockTime> for Duration {
    fn from(time: ClockTime) -> Self {
        time.to_duration()
    }
}

impl Add for ClockTime {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_minutes(self.as_minutes() + other.as_minutes())
    }
}

impl AddAssign for ClockTime {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for ClockTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        match self.checked_sub(other) {
            Some(difference) => difference,
            None => panic!("cannot subtract {} from the earlier time {}", other, self),
        }
    }
}

impl FromStr for ClockTime {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = string
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected a time like \"09:30\", got \"{}\"", string))?;

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
