//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::FixedClock;
use chrono::{NaiveDate, NaiveDateTime};
use rstest::fixture;
use tickler::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskFields},
    services::TaskLifecycleService,
};

/// Lifecycle service over an in-memory repository and a frozen clock.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Fresh in-memory repository for each test.
#[fixture]
pub fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Service whose clock reads 2025-01-10 09:00 local time.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(FixedClock::at(2025, 1, 10, 9)),
    )
}

/// Wall-clock time matching the [`service`] fixture's clock.
pub fn fixture_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 10)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid fixture time")
}

/// Builds a validated creation draft.
///
/// # Errors
///
/// Returns an error when the fields fail validation.
pub fn draft(date: &str, title: &str, repeat: &str) -> Result<TaskDraft, eyre::Report> {
    let fields = TaskFields {
        date: date.to_owned(),
        title: title.to_owned(),
        comment: String::new(),
        repeat: repeat.to_owned(),
    };
    Ok(TaskDraft::for_creation(fields, fixture_now())?)
}
