//! Diesel row models for task persistence.

use super::schema::scheduler;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = scheduler)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Due date in `YYYYMMDD` form.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Free-form comment.
    pub comment: String,
    /// Recurrence rule string.
    pub repeat: String,
}

/// Insert and update model for task records.
///
/// The identifier is left to the `BIGSERIAL` default on insert and used as
/// the filter on update, so it is not part of the changeset.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = scheduler)]
pub struct TaskFieldsRow {
    /// Due date in `YYYYMMDD` form.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Free-form comment.
    pub comment: String,
    /// Recurrence rule string.
    pub repeat: String,
}
