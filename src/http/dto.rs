//! JSON payloads exchanged with HTTP clients.

use crate::task::domain::{ParseTaskIdError, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Task identifier as sent by clients, either a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTaskId {
    /// Identifier sent as a string, e.g. `"12"`.
    Text(String),
    /// Identifier sent as a number, e.g. `12`.
    Number(i64),
}

impl RawTaskId {
    /// Converts the raw value into a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] for non-numeric or non-positive values.
    pub fn parse(&self) -> Result<TaskId, ParseTaskIdError> {
        match self {
            Self::Text(text) => text.parse(),
            Self::Number(number) => TaskId::new(*number),
        }
    }
}

/// Body of a task creation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewTaskPayload {
    /// Requested due date; empty means today.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Free-form comment.
    pub comment: String,
    /// Recurrence rule.
    pub repeat: String,
}

/// Body of a task update request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskUpdatePayload {
    /// Identifier of the task to overwrite.
    pub id: Option<RawTaskId>,
    /// New due date.
    pub date: String,
    /// New title.
    pub title: String,
    /// New comment.
    pub comment: String,
    /// New recurrence rule.
    pub repeat: String,
}

/// Response to a successful creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedBody {
    /// Identifier assigned to the new task.
    pub id: TaskId,
}

/// Empty JSON object returned by mutations.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

/// Task as rendered to clients, with every field as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Identifier.
    pub id: String,
    /// Due date in `YYYYMMDD` form.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Free-form comment.
    pub comment: String,
    /// Recurrence rule.
    pub repeat: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            date: task.date().to_string(),
            title: task.title().to_owned(),
            comment: task.comment().to_owned(),
            repeat: task.rule().to_string(),
        }
    }
}

/// Response listing upcoming tasks.
#[derive(Debug, Clone, Serialize)]
pub struct TaskListBody {
    /// Tasks ordered by due date; never `null`.
    pub tasks: Vec<TaskView>,
}

/// Query string carrying a task identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    /// Raw identifier.
    pub id: Option<String>,
}

/// Query string of the next-date calculator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NextDateQuery {
    /// Reference day in `YYYYMMDD` form.
    pub now: Option<String>,
    /// Anchor date in `YYYYMMDD` form.
    pub date: String,
    /// Recurrence rule.
    pub repeat: String,
}
