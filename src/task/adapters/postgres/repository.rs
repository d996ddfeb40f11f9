//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskFieldsRow, TaskRow},
    schema::scheduler,
};
use crate::task::{
    domain::{PersistedTaskData, RecurrenceRule, Task, TaskDate, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL creating the `scheduler` table and its date index.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2025-01-10-000000_create_scheduler/up.sql");

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot
    /// open its initial connections.
    pub fn connect(database_url: &str, max_size: u32) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the `scheduler` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<TaskId> {
        let row = TaskFieldsRow {
            date: draft.date().to_string(),
            title: draft.title().to_owned(),
            comment: draft.comment().to_owned(),
            repeat: draft.rule().to_string(),
        };

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(scheduler::table)
                .values(&row)
                .returning(scheduler::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            TaskId::new(id).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = scheduler::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_upcoming(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>> {
        let row_limit = i64::try_from(limit).map_err(TaskRepositoryError::persistence)?;
        self.run_blocking(move |connection| {
            let rows = scheduler::table
                .select(TaskRow::as_select())
                .order((scheduler::date.asc(), scheduler::id.asc()))
                .limit(row_limit)
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn overwrite(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let changes = TaskFieldsRow {
            date: task.date().to_string(),
            title: task.title().to_owned(),
            comment: task.comment().to_owned(),
            repeat: task.rule().to_string(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(scheduler::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(scheduler::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(deleted).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        date,
        title,
        comment,
        repeat,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        date: TaskDate::parse(&date).map_err(TaskRepositoryError::persistence)?,
        title,
        comment,
        rule: RecurrenceRule::parse(&repeat).map_err(TaskRepositoryError::persistence)?,
    };
    Ok(Task::from_persisted(data))
}
