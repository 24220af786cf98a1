//! Typing Results API Library
//!
//! # Overview
//!
//! 타자 속도 테스트의 결과를 저장하고 리더보드/통계를 제공하는 백엔드.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌──────────────┐  ┌─────────┐  ┌───────┐  │
//! │  │ Routes  │→ │ResultsService│→ │   DB    │  │ Types │  │
//! │  └─────────┘  └──────────────┘  └────┬────┘  └───────┘  │
//! └──────────────────────────────────────┼──────────────────┘
//!                                        ▼
//!                              ┌──────────────────┐
//!                              │  SQLite (file)   │
//!                              └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `services`: 비즈니스 로직 (검증, 리더보드, 통계)
//! - `db`: SQLite 연동
//! - `types`: 요청/응답 타입
//!
//! ## Usage
//!
//! ```rust,ignore
//! use typing_results_api::{AppState, Config, Database, routes};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url, config.max_connections).await?;
//!     db.init_schema().await?;
//!     let app = routes::router(AppState::new(db, &config));
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;
pub use services::ResultsService;

/// 애플리케이션 상태 (핸들러에 명시적으로 주입)
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub results: ResultsService,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        let db = Arc::new(db);
        let results = ResultsService::new(db.clone(), config.expose_error_details);
        Self { db, results }
    }
}
