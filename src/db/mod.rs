//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 왜 SQLite인가?
//! A: 단일 테이블, insert-only 워크로드
//!    - 별도 DB 서버 없이 파일 하나로 운영
//!    - 동시 쓰기 직렬화는 SQLite 락이 담당
//!    - WAL 모드: 쓰기 중에도 읽기 가능
//!
//! Q: 커넥션은 어떻게 관리하는가?
//! A: SQLx의 SqlitePool 사용
//!    - 쿼리마다 풀에서 커넥션 획득 → 종료 시 자동 반환 (에러 경로 포함)
//!    - acquire_timeout: 무한 대기 방지

mod models;
mod repository;

pub use models::*;
pub use repository::ResultRepository;
#[cfg(test)]
pub use repository::mock;

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// 데이터베이스 연결 및 쿼리 담당
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 설정값 (DB_MAX_CONNECTIONS)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    /// - 파일이 없으면 생성
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 스키마 초기화 (멱등)
    ///
    /// 마이그레이션은 `CREATE TABLE IF NOT EXISTS`라서 기존 `results` 테이블이
    /// 있는 파일에도 안전하게 적용됨
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// 저장된 결과 수 (`results` 테이블이 없으면 에러 → 헬스 체크에서 사용)
    pub async fn count_results(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM results")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ResultRepository for Database {
    async fn insert_result(&self, result: &NewTestResult) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO results (
                wpm, accuracy, cpm, total_chars, duration, timestamp, ip_address
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(result.wpm)
        .bind(result.accuracy)
        .bind(result.cpm)
        .bind(result.total_chars)
        .bind(result.duration)
        .bind(&result.timestamp)
        .bind(&result.ip_address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn top_results(&self, limit: u32) -> Result<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT wpm, accuracy, cpm, total_chars, duration, timestamp
            FROM results
            ORDER BY wpm DESC, id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn aggregate_stats(&self) -> Result<StatsRow> {
        let stats = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_tests,
                AVG(wpm) AS avg_wpm,
                MAX(wpm) AS max_wpm,
                AVG(accuracy) AS avg_accuracy
            FROM results
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
