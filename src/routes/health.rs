//! Readiness Endpoint
//!
//! Reports whether the `results` table is reachable, i.e. whether a
//! submission right now would have somewhere to land.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" | "unavailable"
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageStatus,
}

#[derive(Debug, Serialize)]
pub struct StorageStatus {
    /// `results` 테이블 조회 가능 여부
    pub results_table: bool,
    pub stored_results: Option<i64>,
}

/// GET /health
///
/// 테이블이 없거나 DB 파일을 읽을 수 없으면 503 (로드밸런서가 트래픽 차단)
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, storage) = match state.db.count_results().await {
        Ok(count) => (
            StatusCode::OK,
            "ok",
            StorageStatus {
                results_table: true,
                stored_results: Some(count),
            },
        ),
        Err(e) => {
            tracing::warn!("Results table unavailable: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                StorageStatus {
                    results_table: false,
                    stored_results: None,
                },
            )
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            storage,
        }),
    )
}
