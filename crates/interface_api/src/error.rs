//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use core_kernel::{CoreError, PortError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// One entry per failed field rule, formatted `field: message`
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, details) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            ApiError::Validation(details) => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(details.clone()))
            }
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict", None),
            ApiError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", None),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::Storage(port) => match port {
                PortError::Conflict { message } => ApiError::Conflict(message),
                PortError::Connection { message, .. } => ApiError::Unavailable(message),
                other => ApiError::Internal(other.to_string()),
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        details.sort();
        ApiError::Validation(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::EntityKind;

    #[test]
    fn test_not_found_maps_to_404() {
        let api: ApiError = CoreError::not_found(EntityKind::Policy, 4).into();
        assert_eq!(api.to_string(), "Policy not found with id: 4");
        assert_eq!(api.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_errors_map_by_kind() {
        let conflict: ApiError = CoreError::Storage(PortError::conflict("duplicate")).into();
        let down: ApiError = CoreError::Storage(PortError::connection("refused")).into();
        let other: ApiError = CoreError::Storage(PortError::internal("boom")).into();

        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(down.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(other.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let api = ApiError::Validation(vec!["name: too short".to_string()]);
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
