//! Mapping of service failures onto HTTP responses.

use crate::task::{domain::ParseTaskIdError, services::TaskLifecycleError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the task API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not name a task.
    #[error("task identifier is not specified")]
    MissingId,

    /// The task identifier is malformed.
    #[error(transparent)]
    InvalidId(#[from] ParseTaskIdError),

    /// The request body is not the expected JSON document.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// The lifecycle service rejected the request.
    #[error(transparent)]
    Lifecycle(#[from] TaskLifecycleError),
}

impl ApiError {
    /// Returns the status code clients receive for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingId | Self::InvalidId(_) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Lifecycle(TaskLifecycleError::Domain(_)) => StatusCode::BAD_REQUEST,
            Self::Lifecycle(TaskLifecycleError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Lifecycle(TaskLifecycleError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "task request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "task request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
