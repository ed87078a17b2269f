use crate::libs::messages::Message;
use crate::libs::service::TaskError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything a handler can fail with, mapped onto a status code.
///
/// Validation problems and malformed input are 400, unknown ids are 404 and
/// store failures are 500 with a generic body; the store error itself only
/// goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Task(#[from] TaskError),

    /// The path segment is not a task id at all.
    #[error("Task with ID {0} not found")]
    UnknownId(String),

    #[error("{0}")]
    BadRequest(Message),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Task(TaskError::Validation(_)) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Task(TaskError::NotFound(_)) | ApiError::UnknownId(_) => StatusCode::NOT_FOUND,
            ApiError::Task(TaskError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(Message::InvalidRequestBody(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(Message::InvalidQuery(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Task(TaskError::Store(e)) => {
                error!("{}", Message::StoreOperationFailed(e.to_string()));
            }
            other => warn!(status = status.as_u16(), "{}", other),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ApiError::from(TaskError::Validation(Message::TaskTitleRequired)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(TaskError::NotFound(9)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::UnknownId("abc".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(TaskError::Store(rusqlite::Error::InvalidQuery)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_do_not_leak_details() {
        let err = ApiError::from(TaskError::Store(rusqlite::Error::InvalidColumnName("secret_column".into())));
        assert_eq!(err.to_string(), Message::DatabaseError.to_string());
    }
}
