//! Typed errors and HTTP mapping.

use crate::resource::ResourceKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No record with the requested id. `None` when the path segment names no known collection.
    #[error("{} not found", kind_label(.kind))]
    NotFound { kind: Option<ResourceKind> },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

fn kind_label(kind: &Option<ResourceKind>) -> &'static str {
    kind.as_ref().map(ResourceKind::display_name).unwrap_or("Resource")
}

impl AppError {
    pub fn not_found(kind: ResourceKind) -> Self {
        AppError::NotFound { kind: Some(kind) }
    }

    pub fn unknown_resource() -> Self {
        AppError::NotFound { kind: None }
    }
}

/// Wire shape of every error: `{"error": "<message>"}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_kind() {
        assert_eq!(AppError::not_found(ResourceKind::Package).to_string(), "Package not found");
        assert_eq!(AppError::not_found(ResourceKind::Customer).to_string(), "Customer not found");
        assert_eq!(AppError::unknown_resource().to_string(), "Resource not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::not_found(ResourceKind::Package).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("body must be a JSON object".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("store lock poisoned".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
