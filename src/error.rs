//! Error Handling Module
//!
//! Maps domain errors to HTTP status codes with a fixed `{"error": ...}` body.
//! Uses thiserror for the error type and tracing for server-side detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorResponse;

/// API 에러 타입
///
/// # Design Decision
///
/// - 검증 실패: 400, 고정 메시지 (내부 정보 노출 안 함)
/// - 저장소 실패: 500, 메시지는 서비스가 결정 (설정에 따라 상세 또는 일반 메시지)
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Missing required fields")]
    MissingFields,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    // ============ 500 Internal Server Error ============
    #[error("{0}")]
    StorageError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::MissingFields => "Missing required fields".to_string(),
            ApiError::MalformedPayload(detail) => {
                tracing::debug!("Rejected payload: {}", detail);
                "Invalid JSON payload".to_string()
            }
            ApiError::StorageError(msg) => msg.clone(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
