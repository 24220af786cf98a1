//! Database Models
//!
//! Row types for the `results` table. Rows are insert-only: there is no
//! update or delete path anywhere in the crate.

use sqlx::FromRow;

/// 저장할 새 결과 (id는 DB가 부여)
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestResult {
    pub wpm: i64,
    pub accuracy: i64,
    pub cpm: i64,
    pub total_chars: i64,
    pub duration: i64,
    /// 서버 시각 (RFC 3339, UTC)
    pub timestamp: String,
    /// 요청자 주소 (감사용, 클라이언트에 반환하지 않음)
    pub ip_address: String,
}

/// 리더보드 조회 결과 행
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub wpm: i64,
    pub accuracy: i64,
    pub cpm: i64,
    pub total_chars: i64,
    pub duration: i64,
    pub timestamp: String,
}

/// 집계 결과 (빈 테이블이면 AVG/MAX는 NULL)
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct StatsRow {
    pub total_tests: i64,
    pub avg_wpm: Option<f64>,
    pub max_wpm: Option<i64>,
    pub avg_accuracy: Option<f64>,
}
