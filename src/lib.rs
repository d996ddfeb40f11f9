//! Tickler: a personal reminder list.
//!
//! Clients create tasks with an optional recurrence rule, and marking a task
//! done either deletes it or advances its due date to the next occurrence.
//!
//! # Architecture
//!
//! Tickler follows hexagonal architecture principles:
//!
//! - **Domain**: date arithmetic and lifecycle decisions with no I/O
//! - **Ports**: the repository trait the domain is persisted through
//! - **Adapters**: in-memory and `PostgreSQL` repositories
//!
//! # Modules
//!
//! - [`task`]: recurrence engine, lifecycle decisions, and persistence
//! - [`http`]: JSON API over the lifecycle service
//! - [`config`]: command-line and environment configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
