//! Reminder task lifecycle.
//!
//! Tasks carry a due date and an optional recurrence rule. Creating a task
//! settles its first due date, and marking it done either deletes it or moves
//! it to the next occurrence of its rule. The module follows hexagonal
//! architecture:
//!
//! - Domain types and decisions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
