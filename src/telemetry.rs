//! Tracing subscriber setup for the server binary.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter applied when `RUST_LOG` is unset, blank, or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Upper bound on the length of a `RUST_LOG` value worth parsing.
const MAX_FILTER_LEN: usize = 4096;

/// Builds the event filter from a raw `RUST_LOG` value.
#[must_use]
pub fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= MAX_FILTER_LEN)
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global formatting subscriber, filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init() -> Result<(), TryInitError> {
    let raw = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter_from(raw.as_deref()))
        .try_init()
}
