//! Task record and the lifecycle decisions made about it.

use super::{RecurrenceRule, TaskDate, TaskDomainError, TaskId};
use chrono::NaiveDateTime;

/// Raw task fields as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Requested due date in `YYYYMMDD` form; may be empty on creation.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Free-form comment.
    pub comment: String,
    /// Recurrence rule in `repeat` grammar form.
    pub repeat: String,
}

/// Validated task contents that have not been written to a store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    date: TaskDate,
    title: String,
    comment: String,
    rule: RecurrenceRule,
}

impl TaskDraft {
    /// Validates a new task and decides its stored date.
    ///
    /// An empty date means today. A date before today becomes today for a
    /// one-shot task, or the next occurrence after today for a recurring one.
    /// Today and later dates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`], a date or rule grammar error,
    /// or [`TaskDomainError::DateOutOfRange`].
    pub fn for_creation(fields: TaskFields, now: NaiveDateTime) -> Result<Self, TaskDomainError> {
        let TaskFields {
            date,
            title: raw_title,
            comment,
            repeat,
        } = fields;
        let title = validated_title(raw_title)?;
        let today = TaskDate::of(now);
        let requested = if date.is_empty() {
            today
        } else {
            TaskDate::parse(&date)?
        };
        let rule = RecurrenceRule::parse(&repeat)?;

        let stored = if requested >= today {
            requested
        } else if rule.is_none() {
            today
        } else {
            // Measured from the start of today, not the current instant.
            rule.next_after(today.start_of_day(), requested)?
        };

        Ok(Self {
            date: stored,
            title,
            comment,
            rule,
        })
    }

    /// Validates replacement contents for an existing task.
    ///
    /// Unlike creation, a past date is rejected rather than moved forward and
    /// a recurrence rule is mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`],
    /// [`TaskDomainError::InvalidDateFormat`],
    /// [`TaskDomainError::DateInPast`], [`TaskDomainError::MissingRule`], or
    /// a rule grammar error.
    pub fn for_update(fields: TaskFields, now: NaiveDateTime) -> Result<Self, TaskDomainError> {
        let TaskFields {
            date,
            title: raw_title,
            comment,
            repeat,
        } = fields;
        let title = validated_title(raw_title)?;
        let requested = TaskDate::parse(&date)?;
        let today = TaskDate::of(now);
        if requested < today {
            return Err(TaskDomainError::DateInPast {
                date: requested.to_string(),
                today: today.to_string(),
            });
        }
        if repeat.is_empty() {
            return Err(TaskDomainError::MissingRule);
        }
        let rule = RecurrenceRule::parse(&repeat)?;

        Ok(Self {
            date: requested,
            title,
            comment,
            rule,
        })
    }

    /// Returns the decided due date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the recurrence rule.
    #[must_use]
    pub const fn rule(&self) -> RecurrenceRule {
        self.rule
    }

    /// Binds the draft to a store-assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            date: self.date,
            title: self.title,
            comment: self.comment,
            rule: self.rule,
        }
    }
}

fn validated_title(title: String) -> Result<String, TaskDomainError> {
    if title.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(title)
}

/// Outcome of marking a task done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// One-shot task; the record is removed.
    Delete,
    /// Recurring task; the record moves to the given date.
    Reschedule(TaskDate),
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Persisted due date.
    pub date: TaskDate,
    /// Persisted title.
    pub title: String,
    /// Persisted comment.
    pub comment: String,
    /// Persisted recurrence rule.
    pub rule: RecurrenceRule,
}

/// A stored reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    date: TaskDate,
    title: String,
    comment: String,
    rule: RecurrenceRule,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            date: data.date,
            title: data.title,
            comment: data.comment,
            rule: data.rule,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the recurrence rule.
    #[must_use]
    pub const fn rule(&self) -> RecurrenceRule {
        self.rule
    }

    /// Decides what marking this task done at `now` does to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DateOutOfRange`] when a recurring task has
    /// no representable next occurrence.
    pub fn completion(&self, now: NaiveDateTime) -> Result<Completion, TaskDomainError> {
        if self.rule.is_none() {
            return Ok(Completion::Delete);
        }
        self.rule
            .next_after(now, self.date)
            .map(Completion::Reschedule)
    }

    /// Moves the task to a new due date.
    pub const fn reschedule(&mut self, date: TaskDate) {
        self.date = date;
    }

    /// Replaces every field but the identifier with the draft's contents.
    pub fn replace_with(&mut self, draft: TaskDraft) {
        self.date = draft.date;
        self.title = draft.title;
        self.comment = draft.comment;
        self.rule = draft.rule;
    }
}
