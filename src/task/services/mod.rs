//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CompletionOutcome, CreateTaskRequest, DEFAULT_LIST_LIMIT, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService, UpdateTaskRequest,
};
