use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use resmap_provider::ProviderError;
use resmap_resolver::ResolverError;
use resmap_routing::RoutingError;
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),

    #[error("Routing error: {0}")]
    RoutingError(#[from] RoutingError),
}

impl From<ResolverError> for ApiError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::InvalidPath(msg) => ApiError::InvalidPath(msg),
        }
    }
}

fn error_body(code: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                error_body("NOT_FOUND", "Resource not found".to_string()),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                error_body("BAD_REQUEST", msg),
            ),
            ApiError::InvalidPath(msg) => (
                StatusCode::BAD_REQUEST,
                error_body("INVALID_PATH", msg),
            ),
            ApiError::ProviderError(err @ ProviderError::UnresolvedPublicPath { .. }) => {
                // Mapping and resolver chain disagree: not a normal miss
                tracing::error!("Resource URL configuration is inconsistent: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("INCONSISTENT_CONFIGURATION", err.to_string()),
                )
            }
            ApiError::ProviderError(err @ ProviderError::LookupPathMismatch { .. }) => (
                StatusCode::BAD_REQUEST,
                error_body("LOOKUP_PATH_MISMATCH", err.to_string()),
            ),
            ApiError::RoutingError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body("ROUTING_ERROR", err.to_string()),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}
