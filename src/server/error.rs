//! API error responses.
//!
//! Every failed request answers with a JSON body:
//!
//! ```json
//! { "code": "not_found", "detail": "Employee 7 not found" }
//! ```
//!
//! | Error | Status |
//! |-------|--------|
//! | `not_found` | 404 |
//! | `invalid_reference` | 400 |
//! | `validation_error` | 422 |
//! | `database_error`, `internal_error` | 500 |

use crate::libs::error::ScheduleError;
use crate::libs::messages::Message;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub code: String,
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Request could not be decoded: bad JSON, query string or path (422).
    #[error("{0}")]
    Invalid(Message),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Schedule(e) => {
                let status = match e {
                    ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
                    ScheduleError::InvalidReference(_) => StatusCode::BAD_REQUEST,
                    ScheduleError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    ScheduleError::Storage(source) => {
                        error!(target: "database", error = %source, "Database error occurred");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let detail = match e {
                    ScheduleError::Storage(_) => Message::StorageFailure.to_string(),
                    other => other.to_string(),
                };
                (status, e.kind(), detail)
            }
            AppError::Invalid(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.to_string()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", Message::InternalFailure.to_string())
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            detail,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(Message::InvalidRequestBody(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Invalid(Message::InvalidQuery(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Invalid(Message::InvalidPath(rejection.body_text()))
    }
}
