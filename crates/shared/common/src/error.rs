//! Unified error handling for the HTTP layer.
//!
//! Provides a single error type that every layer returns and that converts
//! into an Axum HTTP response:
//! - client request errors become `400` with a machine-readable body
//! - missing resources become `404` with an empty body
//! - persistence and internal failures become `500` with a generic message

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

use crate::alert::failure_alert;

/// Error key for a create request that already carries an id
pub const ERROR_KEY_ID_EXISTS: &str = "idexists";

/// Error key for an update request without an id
pub const ERROR_KEY_ID_NULL: &str = "idnull";

/// Error key for a save that references a missing parent
pub const ERROR_KEY_PARENT_NOT_FOUND: &str = "parentnotfound";

/// Error key for a delete of a parent that still has children
pub const ERROR_KEY_REFERENCED: &str = "referenced";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    /// Client error raised against a specific entity, reported with an
    /// error key and failure alert headers.
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: &'static str,
        error_key: &'static str,
    },

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "cache")]
    #[error("Cache error")]
    Cache(#[from] redis::RedisError),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<String>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequestAlert { error_key, .. } => *error_key,
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "cache")]
            AppError::Cache(_) => "CACHE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequestAlert { message, .. } => message.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            #[cfg(feature = "cache")]
            AppError::Cache(e) => {
                tracing::error!("Cache error: {:?}", e);
                "A cache error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::NotFound = self {
            return status.into_response();
        }

        let entity_name = match &self {
            AppError::BadRequestAlert { entity_name, .. } => Some(*entity_name),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                entity_name: entity_name.map(str::to_string),
            },
        };

        match entity_name {
            Some(entity) => {
                (status, failure_alert(entity, self.code()), Json(body)).into_response()
            }
            None => (status, Json(body)).into_response(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request_alert(
        msg: impl Into<String>,
        entity_name: &'static str,
        error_key: &'static str,
    ) -> Self {
        AppError::BadRequestAlert {
            message: msg.into(),
            entity_name,
            error_key,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{ERROR_HEADER, PARAMS_HEADER};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn alert_error_carries_entity_and_key() {
        let error = AppError::bad_request_alert(
            "A new building cannot already have an ID",
            "building",
            ERROR_KEY_ID_EXISTS,
        );
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers().get(ERROR_HEADER).unwrap(), "error.idexists");
        assert_eq!(response.headers().get(PARAMS_HEADER).unwrap(), "building");

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "idexists");
        assert_eq!(body["error"]["entityName"], "building");
        assert_eq!(
            body["error"]["message"],
            "A new building cannot already have an ID"
        );
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = AppError::internal("connection reset by peer").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An internal error occurred");
        assert!(body["error"].get("entityName").is_none());
    }

    #[test]
    fn domain_errors_become_validation_errors() {
        let error = AppError::from(DomainError::missing("floor", "floorNumber"));
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.user_message(), "floor.floorNumber is required");
    }
}
