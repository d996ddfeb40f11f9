//! Error types for task domain validation and recurrence parsing.

use thiserror::Error;

/// Errors returned while validating task fields or computing recurrence
/// dates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A recurrence date was requested without a rule.
    #[error("repeat rule is not specified")]
    MissingRule,

    /// The date is not a valid `YYYYMMDD` calendar day.
    #[error("invalid date '{0}', expected YYYYMMDD")]
    InvalidDateFormat(String),

    /// A daily rule does not consist of `d` and a single integer.
    #[error("unsupported repeat rule format '{0}'")]
    UnsupportedRuleFormat(String),

    /// A daily rule interval lies outside the accepted range.
    #[error("invalid day count {0}, expected a value between 1 and 400")]
    InvalidDayCount(i64),

    /// The rule matches no known recurrence kind.
    #[error("invalid repeat rule '{0}'")]
    InvalidRule(String),

    /// Advancing the date left the representable calendar range.
    #[error("next date for '{0}' is outside the supported calendar range")]
    DateOutOfRange(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// An updated task date lies before the current day.
    #[error("date {date} is before today ({today})")]
    DateInPast {
        /// The rejected date.
        date: String,
        /// The current day at validation time.
        today: String,
    },
}

/// Error returned while parsing a task identifier from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: '{0}'")]
pub struct ParseTaskIdError(pub String);
