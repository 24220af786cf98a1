//! Common Types Module
//!
//! HTTP 요청/응답 본문 정의. 필드 이름은 기존 프론트엔드와 호환되어야 함
//! (결과/리더보드는 camelCase, 통계는 snake_case).

use serde::{Deserialize, Serialize};

/// 결과 저장 요청
///
/// 모든 필드는 필수지만 `Option`으로 받아서 누락 여부를 직접 판단함
/// (serde 에러 대신 고정 메시지 400 응답을 위해)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultRequest {
    pub wpm: Option<i64>,
    pub accuracy: Option<i64>,
    pub cpm: Option<i64>,
    pub total_chars: Option<i64>,
    pub duration: Option<i64>,
}

/// 리더보드 항목 (id, ip_address는 절대 노출하지 않음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub wpm: i64,
    pub accuracy: i64,
    pub cpm: i64,
    pub total_chars: i64,
    pub duration: i64,
    pub timestamp: String,
}

/// 전체 통계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_tests: i64,
    pub avg_wpm: f64,
    pub max_wpm: i64,
    pub avg_accuracy: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
