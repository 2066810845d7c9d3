//! Error types for destinyd

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use destiny_matrix::MatrixError;
use destiny_types::UnsupportedLocale;
use serde::Serialize;
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// Engine construction failed
    #[error("Engine error: {0}")]
    Engine(#[from] MatrixError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for DaemonError {
    fn from(err: config::ConfigError) -> Self {
        DaemonError::Config(err.to_string())
    }
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Locale outside the supported set
    #[error("Bad request: {0}")]
    UnsupportedLocale(#[from] UnsupportedLocale),

    /// Request body could not be read as JSON
    #[error("Bad request: {}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),

    /// Validation error
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Internal error; the cause is logged, never returned
    #[error("Internal error")]
    Internal(String),
}

impl From<MatrixError> for ApiError {
    fn from(err: MatrixError) -> Self {
        match &err {
            MatrixError::MissingRequiredField { field } => ApiError::Validation {
                message: err.to_string(),
                details: Some(serde_json::json!({ "field": field.as_str() })),
            },
            _ => {
                tracing::error!(error = %err, "matrix engine fault");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::UnsupportedLocale(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_LOCALE"),
            ApiError::MalformedBody(rejection) => (rejection.status(), "MALFORMED_BODY"),
            ApiError::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let error = self.to_string();
        let details = match self {
            ApiError::Validation { details, .. } => details,
            _ => None,
        };

        let body = ErrorResponse {
            error,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_types::{LayerId, TraitField};

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::BadRequest("test".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(UnsupportedLocale("fr".to_string()))
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_field_maps_to_validation() {
        let err = ApiError::from(MatrixError::MissingRequiredField {
            field: TraitField::DominantElement,
        });
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["field"], "dominantElement");
    }

    #[tokio::test]
    async fn test_engine_fault_is_not_leaked() {
        let err = ApiError::from(MatrixError::CatalogCorrupted {
            layer: LayerId::StageHouse,
            reason: "duplicate key 'peak|10'".into(),
        });
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal error");
        assert!(json.get("details").is_none());
        assert!(!json.to_string().contains("peak"));
    }
}
