use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 存储层错误，对请求是致命的
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// 缓存层错误，只在服务内部记录，不返回给调用方
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("malformed cache entry: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub enum AppError {
    InvalidInput(Vec<String>),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    details: serde_json::Value,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(details) => AppError::InvalidInput(details),
            ServiceError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid input",
                    details: details.into(),
                },
            ),
            AppError::InternalServerError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Internal server error",
                    details: details.into(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
