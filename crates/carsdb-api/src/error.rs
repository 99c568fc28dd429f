//! # API Error Types
//!
//! Maps store and validation failures to HTTP responses. Error bodies
//! are plain text in the operator's language; driver-level detail goes
//! to the operational log and is never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::StoreError;

/// Localized not-found message shared by the id-addressed handlers.
pub const NOT_FOUND_MESSAGE: &str = "Автомобіль не знайдено";

/// Application-level error type implementing [`IntoResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested identifier does not resolve to a record (404).
    /// Covers syntactically malformed identifiers as well.
    #[error("record not found")]
    NotFound,

    /// Write payload failed validation (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Store operation failed (500). `context` is the localized message
    /// returned to the client; the driver error is only logged.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the localized message for the operation.
    pub fn store(context: &'static str, source: StoreError) -> Self {
        Self::Store { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::Validation(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            Self::Store { context, source } => {
                tracing::error!(error = %source, "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, context).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn store_error() -> StoreError {
        StoreError::Database(mongodb::error::Error::custom("connection reset"))
    }

    async fn response_parts(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404_with_localized_text() {
        let (status, body) = response_parts(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn validation_is_422_with_message() {
        let (status, body) =
            response_parts(AppError::Validation("поле порожнє".to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, "поле порожнє");
    }

    #[tokio::test]
    async fn store_failure_is_500_with_context_only() {
        let err = AppError::store("Помилка отримання списку автомобілів", store_error());
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Помилка отримання списку автомобілів");
        // The driver error must not leak into the response body.
        assert!(!body.contains("connection reset"));
    }

    #[test]
    fn store_error_display_carries_context_and_source() {
        let err = AppError::store("Помилка при додаванні автомобіля", store_error());
        let text = err.to_string();
        assert!(text.contains("Помилка при додаванні автомобіля"));
    }
}
