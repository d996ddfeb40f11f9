//! Repository port for task persistence.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each method maps to a single statement in a transactional store, so
/// callers get per-record atomicity and nothing more.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<TaskId>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns up to `limit` tasks ordered by due date, then identifier.
    async fn list_upcoming(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the stored fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn overwrite(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task and reports how many records were removed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
