//! Shared world state for task completion BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::FixedClock;
use rstest::fixture;
use tickler::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDate},
    services::{CompletionOutcome, TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Scenario world for task completion behaviour tests.
///
/// The repository outlives clock changes so a scenario can create a task on
/// one day and complete it on another.
pub struct CompletionWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub service: Option<TestTaskService>,
    pub created_task: Option<Task>,
    pub last_completion: Option<Result<CompletionOutcome, TaskLifecycleError>>,
}

impl CompletionWorld {
    /// Creates a world with an empty repository and no clock set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryTaskRepository::new()),
            service: None,
            created_task: None,
            last_completion: None,
        }
    }

    /// Rebuilds the service with a clock reading 09:00 on `day`.
    pub fn set_today(&mut self, day: TaskDate) -> Result<(), eyre::Report> {
        let moment = day
            .as_naive()
            .and_hms_opt(9, 0, 0)
            .ok_or_else(|| eyre::eyre!("invalid time of day"))?;
        self.service = Some(TaskLifecycleService::new(
            Arc::clone(&self.repository),
            Arc::new(FixedClock::new(moment)),
        ));
        Ok(())
    }

    /// Returns the service, failing when no step has set today's date.
    pub fn service(&self) -> Result<&TestTaskService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("today has not been set in scenario world"))
    }

    /// Returns the task created by a given step.
    pub fn created_task(&self) -> Result<&Task, eyre::Report> {
        self.created_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for CompletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CompletionWorld {
    CompletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
