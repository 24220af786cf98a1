//! Repository Pattern Implementation
//!
//! # Interview Q&A
//!
//! Q: Repository 패턴을 왜 여기서 쓰는가?
//! A: 서비스 레이어가 SQLite에 직접 묶이지 않게 하기 위함
//!
//!    ```rust,ignore
//!    // Service 레이어
//!    repository.insert_result(&new_result).await?;
//!
//!    // SQLite 구현: db/mod.rs의 Database
//!    // 테스트용 Mock: 아래 mock 모듈
//!    ```
//!
//!    저장소 실패(500) 경로도 Mock으로 재현 가능

use anyhow::Result;
use async_trait::async_trait;

use super::models::{LeaderboardRow, NewTestResult, StatsRow};

/// 결과 저장소 인터페이스 (insert-only: 수정/삭제 없음)
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// 결과 한 행 추가
    async fn insert_result(&self, result: &NewTestResult) -> Result<()>;

    /// wpm 내림차순 상위 `limit`개 (동점은 삽입 순서)
    async fn top_results(&self, limit: u32) -> Result<Vec<LeaderboardRow>>;

    /// 전체 집계
    async fn aggregate_stats(&self) -> Result<StatsRow>;
}
