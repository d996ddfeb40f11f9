//! Request handlers for the task API.

use super::{
    SharedService,
    dto::{
        CreatedBody, EmptyBody, IdQuery, NewTaskPayload, NextDateQuery, TaskListBody,
        TaskUpdatePayload, TaskView,
    },
    error::ApiError,
};
use crate::task::{
    domain::{TaskDate, TaskId, next_date as compute_next_date},
    ports::TaskRepository,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use mockable::Clock;

type ApiResult<T> = Result<Json<T>, ApiError>;

fn required_id(query: &IdQuery) -> Result<TaskId, ApiError> {
    let raw = query
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingId)?;
    Ok(raw.parse()?)
}

/// `GET /api/nextdate`: plain-text next occurrence for a `now`, `date` and
/// `repeat` triple.
#[expect(clippy::unused_async, reason = "axum routes take async handlers")]
pub async fn next_date(Query(query): Query<NextDateQuery>) -> Result<String, (StatusCode, String)> {
    let now_raw = query
        .now
        .filter(|now| !now.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "now missing".to_owned()))?;
    let now = TaskDate::parse(&now_raw)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?
        .start_of_day();

    compute_next_date(now, &query.date, &query.repeat)
        .map(|date| date.to_string())
        .map_err(|err| {
            tracing::warn!(error = %err, "next date rejected");
            (StatusCode::BAD_REQUEST, err.to_string())
        })
}

/// `POST /api/task`: creates a task and returns its identifier.
pub async fn create_task<R, C>(
    State(service): State<SharedService<R, C>>,
    payload: Result<Json<NewTaskPayload>, JsonRejection>,
) -> ApiResult<CreatedBody>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = payload.map_err(|err| ApiError::MalformedBody(err.body_text()))?;
    let request = CreateTaskRequest::new(payload.title)
        .with_date(payload.date)
        .with_comment(payload.comment)
        .with_repeat(payload.repeat);

    let task = service.create(request).await?;
    Ok(Json(CreatedBody { id: task.id() }))
}

/// `GET /api/task?id=N`: returns one task.
pub async fn get_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Query(query): Query<IdQuery>,
) -> ApiResult<TaskView>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.find(required_id(&query)?).await?;
    Ok(Json(TaskView::from(&task)))
}

/// `PUT /api/task`: overwrites an existing task.
pub async fn update_task<R, C>(
    State(service): State<SharedService<R, C>>,
    payload: Result<Json<TaskUpdatePayload>, JsonRejection>,
) -> ApiResult<EmptyBody>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = payload.map_err(|err| ApiError::MalformedBody(err.body_text()))?;
    let id = payload.id.as_ref().ok_or(ApiError::MissingId)?.parse()?;
    let request = UpdateTaskRequest::new(id, payload.date, payload.title, payload.repeat)
        .with_comment(payload.comment);

    service.update(request).await?;
    Ok(Json(EmptyBody::default()))
}

/// `DELETE /api/task?id=N` and `DELETE /api/task/done?id=N`: removes a task.
pub async fn delete_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Query(query): Query<IdQuery>,
) -> ApiResult<EmptyBody>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.delete(required_id(&query)?).await?;
    Ok(Json(EmptyBody::default()))
}

/// `POST /api/task/done?id=N`: marks a task done.
pub async fn complete_task<R, C>(
    State(service): State<SharedService<R, C>>,
    Query(query): Query<IdQuery>,
) -> ApiResult<EmptyBody>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.complete(required_id(&query)?).await?;
    Ok(Json(EmptyBody::default()))
}

/// `GET /api/tasks`: lists the earliest-due tasks.
pub async fn list_tasks<R, C>(State(service): State<SharedService<R, C>>) -> ApiResult<TaskListBody>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.list_upcoming().await?;
    Ok(Json(TaskListBody {
        tasks: tasks.iter().map(TaskView::from).collect(),
    }))
}
