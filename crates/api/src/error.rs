//! API error type with `IntoResponse`.
//!
//! Every failure is rendered as `{"detail": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested primary key does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Malformed or missing input (422).
    #[error("{0}")]
    Validation(String),

    /// Connectivity or constraint failure in the store (500, logged).
    #[error("storage error: {0}")]
    Storage(DbError),
}

/// SQLSTATE 22001: value too long for the column.
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
/// SQLSTATE 22021: e.g. a NUL byte in a text value.
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        if let DbError::NotFound(_) = err {
            return Self::NotFound(err.to_string());
        }
        if let Some(message) = rejected_input(&err) {
            return Self::Validation(message);
        }
        Self::Storage(err)
    }
}

/// The store's message when it refused a value the client supplied.
fn rejected_input(err: &DbError) -> Option<String> {
    let DbError::Sqlx(sqlx::Error::Database(db_err)) = err else {
        return None;
    };
    match db_err.code().as_deref() {
        Some(STRING_DATA_RIGHT_TRUNCATION | CHARACTER_NOT_IN_REPERTOIRE) => {
            Some(db_err.message().to_owned())
        }
        _ => None,
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Sqlx(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Storage(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;

    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
        message: &'static str,
    }

    impl std::fmt::Display for PgFailure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn pg_failure(code: &'static str, message: &'static str) -> ApiError {
        sqlx::Error::Database(Box::new(PgFailure { code, message })).into()
    }

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_carries_entity_name() {
        let (status, body) = render(DbError::NotFound("Job").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Job not found" }));

        let (_, body) = render(DbError::NotFound("Job history").into()).await;
        assert_eq!(body["detail"], "Job history not found");
    }

    #[tokio::test]
    async fn validation_is_unprocessable() {
        let (status, body) = render(ApiError::Validation("bad salary".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "bad salary");
    }

    #[tokio::test]
    async fn storage_errors_are_not_echoed() {
        let (status, body) = render(sqlx::Error::PoolTimedOut.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "internal server error");
    }

    #[tokio::test]
    async fn oversized_or_invalid_text_is_unprocessable() {
        let (status, body) = render(pg_failure(
            "22001",
            "value too long for type character varying(255)",
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "value too long for type character varying(255)");

        let (status, _) = render(pg_failure(
            "22021",
            "invalid byte sequence for encoding \"UTF8\": 0x00",
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn other_database_failures_stay_internal() {
        let (status, body) = render(pg_failure("08006", "connection failure")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "internal server error");
    }
}
