//! Result Endpoints
//!
//! Submission, leaderboard and aggregate statistics for typing tests.
//! Handlers only translate HTTP; validation and storage live in `ResultsService`.

use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    Json,
};

use crate::{
    error::ApiError,
    types::{LeaderboardEntry, MessageResponse, StatsResponse, SubmitResultRequest},
    AppState,
};

/// POST /api/save-result
///
/// # Request
///
/// ```json
/// { "wpm": 80, "accuracy": 97, "cpm": 400, "totalChars": 350, "duration": 60 }
/// ```
///
/// # Response
///
/// - 200 `{"message": "Result saved successfully"}`
/// - 400 `{"error": "Missing required fields"}`
/// - 500 `{"error": "..."}`
pub async fn save_result(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // 본문 파싱 실패 (Content-Type, 문법, 타입 불일치) → 400
    let Json(req) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;

    state.results.submit(req, &addr.ip().to_string()).await?;

    Ok(Json(MessageResponse {
        message: "Result saved successfully".to_string(),
    }))
}

/// GET /api/leaderboard
///
/// wpm 기준 상위 10개. id/ip 주소는 포함하지 않음
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    Ok(Json(state.results.leaderboard().await?))
}

/// GET /api/stats
///
/// ```json
/// { "total_tests": 3, "avg_wpm": 60.0, "max_wpm": 80, "avg_accuracy": 95.0 }
/// ```
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    Ok(Json(state.results.stats().await?))
}
