//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/` - 랜딩 페이지
//! - `/health` - 헬스 체크
//! - `/api/save-result` - 결과 저장
//! - `/api/leaderboard` - 상위 10개 결과
//! - `/api/stats` - 전체 통계

pub mod health;
pub mod results;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::AppState;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Typing Speed Test</title></head>
<body>
<h1>Typing Speed Test</h1>
<p>API: <code>POST /api/save-result</code>, <code>GET /api/leaderboard</code>, <code>GET /api/stats</code></p>
</body>
</html>
"#;

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET  /                  - 랜딩 페이지
/// GET  /health            - 서버 상태 확인
///
/// POST /api/save-result   - 결과 저장
/// GET  /api/leaderboard   - 리더보드
/// GET  /api/stats         - 통계
/// ```
///
/// 미들웨어(CORS, trace)는 main.rs에서 추가
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_check))
        .route("/api/save-result", post(results::save_result))
        .route("/api/leaderboard", get(results::get_leaderboard))
        .route("/api/stats", get(results::get_stats))
        .with_state(state)
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
