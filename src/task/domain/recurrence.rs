//! Recurrence rules and next-occurrence computation.
//!
//! The `repeat` field of a task follows a small grammar:
//!
//! ```text
//! rule   := "" | daily | yearly
//! daily  := "d" SP integer    ; interval in days, 1..=400
//! yearly := "y"
//! ```
//!
//! [`RecurrenceRule::parse`] turns the field into a tagged value once, and
//! [`next_date`] advances an anchor date by that rule.

use super::{TaskDate, TaskDomainError};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted daily interval.
pub const MIN_INTERVAL_DAYS: u16 = 1;

/// Largest accepted daily interval.
pub const MAX_INTERVAL_DAYS: u16 = 400;

/// Latest year whose dates still fit the 8-digit format.
const MAX_FORMATTABLE_YEAR: i32 = 9999;

/// Parsed form of a task's `repeat` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecurrenceRule {
    /// One-shot task; completing it deletes it.
    #[default]
    None,
    /// Repeats every `interval_days` days.
    Daily {
        /// Days between occurrences, within `1..=400`.
        interval_days: u16,
    },
    /// Repeats on the same month and day every year.
    Yearly,
}

impl RecurrenceRule {
    /// Parses a `repeat` field.
    ///
    /// An empty string is [`RecurrenceRule::None`]; everything outside the
    /// grammar is an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnsupportedRuleFormat`] when a `d` rule does
    /// not carry exactly one integer, [`TaskDomainError::InvalidDayCount`]
    /// when that integer is out of range, and
    /// [`TaskDomainError::InvalidRule`] for any other non-empty input.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if value.is_empty() {
            return Ok(Self::None);
        }
        if value == "y" {
            return Ok(Self::Yearly);
        }

        let mut tokens = value.split(' ');
        if tokens.next() != Some("d") {
            return Err(TaskDomainError::InvalidRule(value.to_owned()));
        }
        let (Some(count), None) = (tokens.next(), tokens.next()) else {
            return Err(TaskDomainError::UnsupportedRuleFormat(value.to_owned()));
        };
        let days = count
            .parse::<i64>()
            .map_err(|_| TaskDomainError::UnsupportedRuleFormat(value.to_owned()))?;
        let interval_days = u16::try_from(days)
            .ok()
            .filter(|days| (MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(days))
            .ok_or(TaskDomainError::InvalidDayCount(days))?;

        Ok(Self::Daily { interval_days })
    }

    /// Returns `true` for one-shot tasks.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the first occurrence after `now`, starting from `anchor`.
    ///
    /// Daily rules compare against the calendar day of `now`; yearly rules
    /// compare against `now` itself, with each candidate taken at midnight.
    /// An anniversary falling on today is therefore skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingRule`] for [`RecurrenceRule::None`]
    /// and [`TaskDomainError::DateOutOfRange`] when the next occurrence would
    /// not fit the `YYYYMMDD` format.
    pub fn next_after(
        self,
        now: NaiveDateTime,
        anchor: TaskDate,
    ) -> Result<TaskDate, TaskDomainError> {
        let next = match self {
            Self::None => return Err(TaskDomainError::MissingRule),
            Self::Daily { interval_days } => {
                next_daily(now.date(), anchor.as_naive(), interval_days)
            }
            Self::Yearly => next_yearly(now, anchor.as_naive()),
        };
        next.filter(|date| date.year() <= MAX_FORMATTABLE_YEAR)
            .map(TaskDate::from)
            .ok_or_else(|| TaskDomainError::DateOutOfRange(anchor.to_string()))
    }
}

impl FromStr for RecurrenceRule {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Daily { interval_days } => write!(f, "d {interval_days}"),
            Self::Yearly => f.write_str("y"),
        }
    }
}

/// Computes the next occurrence of a task.
///
/// Validation runs in a fixed order: rule presence, anchor format, then rule
/// grammar.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingRule`] for an empty rule,
/// [`TaskDomainError::InvalidDateFormat`] for a malformed anchor, any rule
/// grammar error from [`RecurrenceRule::parse`], or
/// [`TaskDomainError::DateOutOfRange`].
pub fn next_date(
    now: NaiveDateTime,
    anchor: &str,
    rule: &str,
) -> Result<TaskDate, TaskDomainError> {
    if rule.is_empty() {
        return Err(TaskDomainError::MissingRule);
    }
    let anchor_date = TaskDate::parse(anchor)?;
    RecurrenceRule::parse(rule)?.next_after(now, anchor_date)
}

/// First `anchor + k * interval` (k >= 1) strictly after `today`.
fn next_daily(today: NaiveDate, anchor: NaiveDate, interval_days: u16) -> Option<NaiveDate> {
    let interval = i64::from(interval_days);
    let gap = today.signed_duration_since(anchor).num_days().max(0);
    let steps = gap.div_euclid(interval).checked_add(1)?;
    let offset = u64::try_from(steps.checked_mul(interval)?).ok()?;
    anchor.checked_add_days(Days::new(offset))
}

/// First anniversary of `anchor` strictly after `now`.
///
/// Feb 29 falls on Mar 1 in years without one.
fn next_yearly(now: NaiveDateTime, anchor: NaiveDate) -> Option<NaiveDate> {
    // Anniversaries in years before `now` cannot qualify.
    let first_year = anchor.year().checked_add(1)?.max(now.year());
    (first_year..=first_year.checked_add(1)?)
        .filter_map(|year| anniversary(anchor, year))
        .find(|candidate| candidate.and_hms_opt(0, 0, 0).is_some_and(|midnight| midnight > now))
}

fn anniversary(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    anchor
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
