//! API error type and JSON error body.
//!
//! Every error response is a single-key JSON object: `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::domain::{DomainError, ErrorCode};

/// JSON body for error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::BakeryNotFound => ApiError::NotFound("Bakery not found".to_string()),
            ErrorCode::BakedGoodNotFound => {
                ApiError::NotFound("Baked good not found".to_string())
            }
            // An invalid bakery_id on create is a caller mistake, not a 500.
            ErrorCode::ForeignKeyViolation => ApiError::BadRequest("Bakery not found".to_string()),
            ErrorCode::ValidationFailed => ApiError::BadRequest(err.message),
            ErrorCode::DatabaseError => ApiError::Internal(err.message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_bad_request_to_400() {
        let err = ApiError::BadRequest("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = ApiError::NotFound("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_internal_to_500() {
        let err = ApiError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_not_found_codes_map_to_not_found() {
        let err: ApiError =
            DomainError::new(ErrorCode::BakeryNotFound, "Bakery not found: 7").into();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "Bakery not found"));

        let err: ApiError =
            DomainError::new(ErrorCode::BakedGoodNotFound, "Baked good not found: 7").into();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "Baked good not found"));
    }

    #[test]
    fn foreign_key_violation_maps_to_bad_request() {
        let err: ApiError =
            DomainError::new(ErrorCode::ForeignKeyViolation, "Bakery not found: 999").into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn internal_error_body_does_not_leak_details() {
        let err = ApiError::Internal("connection pool exhausted".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
