//! Unit tests for the task domain and lifecycle service.


use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed local wall-clock time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Freezes the clock at `hour:00` local time on the given day.
    pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self(at(year, month, day, hour))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.0)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&self.0))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Local wall-clock time at `hour:00` on the given day.
pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    day_of(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid time of day")
}

/// Calendar day helper for test expectations.
pub(crate) fn day_of(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar day")
}
