use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::ConfigError;
use crate::domain::errors::{OrderError, StoreError};

/// Error returned to RPC clients, one variant per Connect error code in use.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "invalid_argument",
            AppError::NotFound(_) => "not_found",
            AppError::PermissionDenied(_) => "permission_denied",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidInput(msg) => AppError::InvalidArgument(msg),
            OrderError::NotFound(err) => AppError::NotFound(err.to_string()),
            OrderError::PermissionDenied(msg) => AppError::PermissionDenied(msg),
            OrderError::StorageFailure(err) => AppError::Internal(err.to_string()),
        }
    }
}

/// Failure while starting or stopping the service process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("database migrations: {0}")]
    Migrations(Box<dyn std::error::Error + Send + Sync>),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),

    #[error("closing order store: {0}")]
    Store(#[from] StoreError),
}

/// Connect protocol error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage details stay in the server log.
        let message = match self {
            AppError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            code: self.code().to_string(),
            message,
        })
    }
}
