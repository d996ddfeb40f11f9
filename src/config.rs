//! Server configuration from command-line flags and environment variables.

use crate::task::services::DEFAULT_LIST_LIMIT;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 7540;

/// Connection pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Runtime settings for the reminder server.
///
/// Every flag falls back to a `TODO_*` environment variable, then to a
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tickler", version, about = "Personal reminder list server")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "TODO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// `PostgreSQL` connection URL; tasks are kept in memory when unset.
    #[arg(long, env = "TODO_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of tasks returned by the task list endpoint.
    #[arg(long, env = "TODO_LIST_LIMIT", default_value_t = DEFAULT_LIST_LIMIT)]
    pub list_limit: usize,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TODO_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,
}

/// Where task records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    /// Process-local map, lost on restart.
    Memory,
    /// `PostgreSQL` database at the given URL.
    Postgres(&'a str),
}

impl ServerConfig {
    /// Returns the socket address to bind.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the configured storage backend.
    ///
    /// A blank database URL counts as unset.
    #[must_use]
    pub fn storage(&self) -> StorageBackend<'_> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or(StorageBackend::Memory, StorageBackend::Postgres)
    }
}
