//! Results Service
//!
//! Validation, ingestion, leaderboard and statistics for typing test results.
//! Holds no record state between calls: every read goes back to the repository.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::db::{NewTestResult, ResultRepository, StatsRow};
use crate::error::ApiError;
use crate::types::{LeaderboardEntry, StatsResponse, SubmitResultRequest};

/// 리더보드 크기 (고정)
pub const LEADERBOARD_SIZE: u32 = 10;

const GENERIC_STORAGE_ERROR: &str = "Database error occurred";

/// 결과 서비스
///
/// 시작 시 한 번 생성되어 `AppState`로 핸들러에 주입됨
#[derive(Clone)]
pub struct ResultsService {
    repo: Arc<dyn ResultRepository>,
    expose_error_details: bool,
}

impl ResultsService {
    pub fn new(repo: Arc<dyn ResultRepository>, expose_error_details: bool) -> Self {
        Self {
            repo,
            expose_error_details,
        }
    }

    /// 결과 저장
    ///
    /// 다섯 필드 중 하나라도 없으면 아무것도 쓰지 않고 `MissingFields`.
    /// 값 범위는 검사하지 않음 (음수 wpm도 그대로 저장).
    pub async fn submit(&self, req: SubmitResultRequest, client_addr: &str) -> Result<(), ApiError> {
        let result = match req {
            SubmitResultRequest {
                wpm: Some(wpm),
                accuracy: Some(accuracy),
                cpm: Some(cpm),
                total_chars: Some(total_chars),
                duration: Some(duration),
            } => NewTestResult {
                wpm,
                accuracy,
                cpm,
                total_chars,
                duration,
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
                ip_address: client_addr.to_string(),
            },
            _ => return Err(ApiError::MissingFields),
        };

        self.repo
            .insert_result(&result)
            .await
            .map_err(|e| self.storage_error("insert result", e))?;

        tracing::debug!(wpm = result.wpm, client = %client_addr, "Result saved");
        Ok(())
    }

    /// 상위 10개 결과 (wpm 내림차순)
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let rows = self
            .repo
            .top_results(LEADERBOARD_SIZE)
            .await
            .map_err(|e| self.storage_error("load leaderboard", e))?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardEntry {
                wpm: row.wpm,
                accuracy: row.accuracy,
                cpm: row.cpm,
                total_chars: row.total_chars,
                duration: row.duration,
                timestamp: row.timestamp,
            })
            .collect())
    }

    /// 전체 통계
    pub async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let StatsRow {
            total_tests,
            avg_wpm,
            max_wpm,
            avg_accuracy,
        } = self
            .repo
            .aggregate_stats()
            .await
            .map_err(|e| self.storage_error("compute stats", e))?;

        Ok(StatsResponse {
            total_tests,
            avg_wpm: round1(avg_wpm.unwrap_or(0.0)),
            max_wpm: max_wpm.unwrap_or(0),
            avg_accuracy: round1(avg_accuracy.unwrap_or(0.0)),
        })
    }

    /// 상세 내용은 항상 로그로, 응답 메시지는 설정에 따라
    fn storage_error(&self, operation: &str, err: anyhow::Error) -> ApiError {
        tracing::error!(operation, "Storage error: {:#}", err);
        if self.expose_error_details {
            ApiError::StorageError(format!("{:#}", err))
        } else {
            ApiError::StorageError(GENERIC_STORAGE_ERROR.to_string())
        }
    }
}

/// 소수점 첫째 자리 반올림 (정확한 .x5는 짝수 쪽으로: 95.25 → 95.2)
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
