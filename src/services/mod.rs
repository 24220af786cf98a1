//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `ResultsService`: 결과 검증/저장, 리더보드, 통계

mod results;

pub use results::{ResultsService, LEADERBOARD_SIZE};
