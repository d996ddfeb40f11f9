//! Identifier types for the task domain.

use super::ParseTaskIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier for a task record.
///
/// Identifiers are positive integers handed out by the repository on insert
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a raw identifier, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when `value` is not positive.
    pub fn new(value: i64) -> Result<Self, ParseTaskIdError> {
        if value <= 0 {
            return Err(ParseTaskIdError(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = raw
            .parse::<i64>()
            .map_err(|_| ParseTaskIdError(s.to_owned()))?;
        Self::new(value).map_err(|_| ParseTaskIdError(s.to_owned()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
