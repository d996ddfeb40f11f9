//! Runs the reminder list HTTP server.
//!
//! Usage:
//!
//! ```text
//! tickler [--host ADDR] [--port PORT] [--database-url URL] [--list-limit N]
//! ```
//!
//! Every flag also reads a `TODO_*` environment variable (`TODO_PORT`,
//! `TODO_DATABASE_URL`, ...). Without a database URL tasks live in memory
//! and vanish on exit.

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use tickler::config::{ServerConfig, StorageBackend};
use tickler::http;
use tickler::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    tickler::telemetry::init().wrap_err("install tracing subscriber")?;

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .wrap_err_with(|| format!("bind {}", config.listen_addr()))?;

    match config.storage() {
        StorageBackend::Memory => {
            tracing::warn!("no database configured; tasks are kept in memory");
            serve(InMemoryTaskRepository::new(), &config, listener).await
        }
        StorageBackend::Postgres(url) => {
            let database_url = url.to_owned();
            let pool_size = config.pool_size;
            let repository = tokio::task::spawn_blocking(move || {
                PostgresTaskRepository::connect(&database_url, pool_size)
            })
            .await
            .wrap_err("join database connect task")?
            .wrap_err("connect to database")?;
            repository
                .ensure_schema()
                .await
                .wrap_err("create scheduler table")?;
            serve(repository, &config, listener).await
        }
    }
}

async fn serve<R>(repository: R, config: &ServerConfig, listener: TcpListener) -> eyre::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock))
        .with_list_limit(config.list_limit);
    let app = http::router(Arc::new(service));

    tracing::info!(addr = %listener.local_addr()?, "tickler listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server terminated with error")?;
    tracing::info!("tickler stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
