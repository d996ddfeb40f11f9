//! Domain model for reminder tasks.
//!
//! The domain owns date parsing, the recurrence grammar, and the decisions
//! taken when a task is created, updated, or completed. It performs no I/O
//! and reads the current time only through values passed in by callers.

mod date;
mod error;
mod ids;
pub mod recurrence;
mod task;

pub use date::{DATE_FORMAT, TaskDate};
pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use recurrence::{RecurrenceRule, next_date};
pub use task::{Completion, PersistedTaskData, Task, TaskDraft, TaskFields};
