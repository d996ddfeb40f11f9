//! Calendar-day values stored in the fixed `YYYYMMDD` format.

use super::TaskDomainError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for persisted and transmitted task dates.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Width of a formatted task date.
const DATE_WIDTH: usize = 8;

/// Calendar day a task is due on, without time-of-day or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskDate(NaiveDate);

impl TaskDate {
    /// Parses an 8-digit `YYYYMMDD` date.
    ///
    /// Shorter forms that `chrono` would otherwise accept (for example
    /// `2024111`) are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDateFormat`] when the value is not
    /// exactly eight ASCII digits or names a day that does not exist.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let is_fixed_width =
            value.len() == DATE_WIDTH && value.bytes().all(|byte| byte.is_ascii_digit());
        if !is_fixed_width {
            return Err(TaskDomainError::InvalidDateFormat(value.to_owned()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDateFormat(value.to_owned()))
    }

    /// Returns the calendar day of a local wall-clock instant.
    #[must_use]
    pub const fn of(now: NaiveDateTime) -> Self {
        Self(now.date())
    }

    /// Returns local midnight at the start of this day.
    #[must_use]
    pub fn start_of_day(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TaskDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for TaskDate {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
