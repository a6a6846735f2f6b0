// analytics-backend/src/error.rs

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// エラー種別の識別子（トランスポート層がレスポンス種別の決定に使う）
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::ValidationErrors(_) => "validation_errors",
            AppError::ValidationFailure(_) => "validation_errors",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::InternalServerError(_) => "internal_server_error",
            AppError::ExternalServiceError(_) => "external_service_error",
        }
    }
}

// 統一Result型エイリアス
pub type AppResult<T> = Result<T, AppError>;
