//! Service layer for creating, rescheduling, and retiring reminder tasks.

use crate::task::{
    domain::{Completion, Task, TaskDomainError, TaskDraft, TaskFields, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Number of tasks returned by [`TaskLifecycleService::list_upcoming`] unless
/// configured otherwise.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    fields: TaskFields,
}

impl CreateTaskRequest {
    /// Creates a request due today with no comment and no recurrence.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            fields: TaskFields {
                title: title.into(),
                ..TaskFields::default()
            },
        }
    }

    /// Sets the requested due date in `YYYYMMDD` form.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.fields.date = date.into();
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.fields.comment = comment.into();
        self
    }

    /// Sets the recurrence rule.
    #[must_use]
    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.fields.repeat = repeat.into();
        self
    }
}

/// Request payload for replacing the contents of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    fields: TaskFields,
}

impl UpdateTaskRequest {
    /// Creates an update request with the mandatory fields.
    #[must_use]
    pub fn new(
        id: TaskId,
        date: impl Into<String>,
        title: impl Into<String>,
        repeat: impl Into<String>,
    ) -> Self {
        Self {
            id,
            fields: TaskFields {
                date: date.into(),
                title: title.into(),
                comment: String::new(),
                repeat: repeat.into(),
            },
        }
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.fields.comment = comment.into();
        self
    }
}

/// What happened to a task that was marked done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The one-shot task was deleted.
    Deleted(TaskId),
    /// The recurring task was moved to its next occurrence.
    Rescheduled(Task),
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    list_limit: usize,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Sets the maximum number of tasks returned by
    /// [`Self::list_upcoming`].
    #[must_use]
    pub const fn with_list_limit(mut self, list_limit: usize) -> Self {
        self.list_limit = list_limit;
        self
    }

    /// Returns the current local wall-clock time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.local().naive_local()
    }

    /// Creates a task, moving a past due date to today or to the next
    /// occurrence of its rule.
    ///
    /// Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the fields are invalid or
    /// [`TaskLifecycleError::Repository`] when the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = TaskDraft::for_creation(request.fields, self.now())?;
        let id = self.repository.insert(&draft).await?;
        Ok(draft.into_task(id))
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn find(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Returns the earliest-due tasks, up to the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_upcoming(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_upcoming(self.list_limit).await?)
    }

    /// Replaces the date, title, comment, and rule of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the fields are invalid
    /// (including a date before today or an empty rule) and
    /// [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = TaskDraft::for_update(request.fields, self.now())?;
        let mut task = self.find(request.id).await?;
        task.replace_with(draft);
        self.repository.overwrite(&task).await?;
        Ok(task)
    }

    /// Marks a task done.
    ///
    /// One-shot tasks are deleted, so completing one twice yields
    /// [`TaskLifecycleError::NotFound`] the second time. Recurring tasks move
    /// to the first occurrence after now and keep their identifier.
    ///
    /// The lookup and the write are separate statements; two concurrent
    /// completions of the same task can both read the old date and write the
    /// same next date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Domain`] when the stored rule cannot produce
    /// a next date.
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<CompletionOutcome> {
        let mut task = self.find(id).await?;
        match task.completion(self.now())? {
            Completion::Delete => {
                self.delete(id).await?;
                Ok(CompletionOutcome::Deleted(id))
            }
            Completion::Reschedule(date) => {
                task.reschedule(date);
                self.repository.overwrite(&task).await?;
                Ok(CompletionOutcome::Rescheduled(task))
            }
        }
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no record was removed.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let removed = self.repository.delete(id).await?;
        if removed == 0 {
            return Err(TaskLifecycleError::NotFound(id));
        }
        Ok(())
    }
}
