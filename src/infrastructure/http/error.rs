//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 500 响应的固定文案，存储层细节只写日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        match e {
            crate::application::ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            crate::application::ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
