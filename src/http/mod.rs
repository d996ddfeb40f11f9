//! HTTP shell around the task lifecycle service.
//!
//! Routes decode query strings and JSON bodies, delegate to
//! [`TaskLifecycleService`], and render `{"error": "..."}` bodies for
//! failures. Unsupported methods on a known path answer `405`.

mod dto;
mod error;
mod handlers;

pub use dto::{
    CreatedBody, EmptyBody, IdQuery, NewTaskPayload, NextDateQuery, RawTaskId, TaskListBody,
    TaskUpdatePayload, TaskView,
};
pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use mockable::Clock;
use std::sync::Arc;

/// Service handle shared by every request handler.
pub type SharedService<R, C> = Arc<TaskLifecycleService<R, C>>;

/// Builds the API router over a lifecycle service.
pub fn router<R, C>(service: SharedService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/nextdate", get(handlers::next_date))
        .route(
            "/api/task",
            get(handlers::get_task::<R, C>)
                .post(handlers::create_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route("/api/tasks", get(handlers::list_tasks::<R, C>))
        .route(
            "/api/task/done",
            post(handlers::complete_task::<R, C>).delete(handlers::delete_task::<R, C>),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(service)
}

async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        "received request"
    );
    next.run(request).await
}
