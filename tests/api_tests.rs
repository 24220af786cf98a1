//! End-to-end tests: full router against a real SQLite file.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use typing_results_api::{routes, AppState, Config, Database};

const CLIENT_IP: [u8; 4] = [203, 0, 113, 7];

struct TestApp {
    _dir: TempDir,
    database_url: String,
    router: Router,
}

impl TestApp {
    async fn spawn() -> Self {
        Self::spawn_with_schema(true).await
    }

    async fn spawn_with_schema(init_schema: bool) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let database_url = format!("sqlite://{}", dir.path().join("typing_results.db").display());

        let url = database_url.clone();
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some(url.clone()),
            _ => None,
        })
        .unwrap();

        let db = Database::connect(&config.database_url, config.max_connections)
            .await
            .unwrap();
        if init_schema {
            db.init_schema().await.unwrap();
        }

        let router = routes::router(AppState::new(db, &config))
            .layer(MockConnectInfo(SocketAddr::from((CLIENT_IP, 4321))));

        Self {
            _dir: dir,
            database_url,
            router,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        self.send(
            Request::post("/api/save-result")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn submit(&self, payload: Value) -> (StatusCode, Value) {
        self.post_raw(&payload.to_string()).await
    }

    async fn submit_wpm(&self, wpm: i64, accuracy: i64) {
        let (status, _) = self
            .submit(json!({
                "wpm": wpm,
                "accuracy": accuracy,
                "cpm": wpm * 5,
                "totalChars": wpm * 4,
                "duration": 60
            }))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    async fn total_tests(&self) -> i64 {
        let (_, stats) = self.get("/api/stats").await;
        stats["total_tests"].as_i64().unwrap()
    }
}

fn full_payload() -> Value {
    json!({ "wpm": 80, "accuracy": 97, "cpm": 400, "totalChars": 350, "duration": 60 })
}

#[tokio::test]
async fn schema_init_twice_keeps_table_and_data() {
    let app = TestApp::spawn().await;
    app.submit(full_payload()).await;

    let db = Database::connect(&app.database_url, 1).await.unwrap();
    db.init_schema().await.unwrap();
    db.init_schema().await.unwrap();

    assert_eq!(app.total_tests().await, 1);
}

#[tokio::test]
async fn save_result_acknowledges() {
    let app = TestApp::spawn().await;
    let (status, body) = app.submit(full_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Result saved successfully" }));
}

#[tokio::test]
async fn save_result_records_client_address() {
    let app = TestApp::spawn().await;
    app.submit(full_payload()).await;

    let pool = sqlx::SqlitePool::connect(&app.database_url).await.unwrap();
    let (ip,): (String,) = sqlx::query_as("SELECT ip_address FROM results")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ip, "203.0.113.7");
}

#[tokio::test]
async fn each_missing_field_is_rejected_without_writing() {
    let app = TestApp::spawn().await;

    for field in ["wpm", "accuracy", "cpm", "totalChars", "duration"] {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = app.submit(payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(body, json!({ "error": "Missing required fields" }));
    }

    assert_eq!(app.total_tests().await, 0);
}

#[tokio::test]
async fn null_field_counts_as_missing() {
    let app = TestApp::spawn().await;
    let mut payload = full_payload();
    payload["cpm"] = Value::Null;

    let (status, body) = app.submit(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
    assert_eq!(app.total_tests().await, 0);
}

#[tokio::test]
async fn malformed_payloads_are_bad_requests() {
    let app = TestApp::spawn().await;

    let (status, body) = app.post_raw("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON payload");

    let (status, _) = app
        .submit(json!({ "wpm": "fast", "accuracy": 97, "cpm": 400, "totalChars": 350, "duration": 60 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Request::post("/api/save-result")
                .body(Body::from(full_payload().to_string()))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(app.total_tests().await, 0);
}

#[tokio::test]
async fn submitted_result_round_trips_to_leaderboard() {
    let app = TestApp::spawn().await;
    app.submit(full_payload()).await;

    let (status, board) = app.get("/api/leaderboard").await;
    assert_eq!(status, StatusCode::OK);

    let entries = board.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["wpm"], 80);
    assert_eq!(entry["accuracy"], 97);
    assert_eq!(entry["cpm"], 400);
    assert_eq!(entry["totalChars"], 350);
    assert_eq!(entry["duration"], 60);
    assert!(chrono::DateTime::parse_from_rfc3339(entry["timestamp"].as_str().unwrap()).is_ok());
    assert!(entry.get("id").is_none());
    assert!(entry.get("ipAddress").is_none());
    assert!(entry.get("ip_address").is_none());
}

#[tokio::test]
async fn leaderboard_is_top_ten_descending() {
    let app = TestApp::spawn().await;
    for wpm in 1..=15 {
        app.submit_wpm(wpm, 90).await;
    }

    let (_, board) = app.get("/api/leaderboard").await;
    let wpms: Vec<i64> = board
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["wpm"].as_i64().unwrap())
        .collect();

    assert_eq!(wpms.len(), 10);
    assert_eq!(wpms.first(), Some(&15));
    assert_eq!(wpms.last(), Some(&6));
    assert!(wpms.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn leaderboard_on_empty_store_is_empty() {
    let app = TestApp::spawn().await;
    let (status, board) = app.get("/api/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, json!([]));
}

#[tokio::test]
async fn stats_on_empty_store_are_zero() {
    let app = TestApp::spawn().await;
    let (status, stats) = app.get("/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_tests"].as_i64(), Some(0));
    assert_eq!(stats["avg_wpm"].as_f64(), Some(0.0));
    assert_eq!(stats["max_wpm"].as_i64(), Some(0));
    assert_eq!(stats["avg_accuracy"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn stats_aggregate_all_results() {
    let app = TestApp::spawn().await;
    for (wpm, accuracy) in [(40, 90), (60, 95), (80, 100)] {
        app.submit_wpm(wpm, accuracy).await;
    }

    let (_, stats) = app.get("/api/stats").await;
    assert_eq!(stats["total_tests"].as_i64(), Some(3));
    assert_eq!(stats["avg_wpm"].as_f64(), Some(60.0));
    assert_eq!(stats["max_wpm"].as_i64(), Some(80));
    assert_eq!(stats["avg_accuracy"].as_f64(), Some(95.0));
}

#[tokio::test]
async fn stats_average_of_four_rounds_half_to_even() {
    let app = TestApp::spawn().await;
    for accuracy in [95, 95, 95, 96] {
        app.submit_wpm(60, accuracy).await;
    }

    let (_, stats) = app.get("/api/stats").await;
    assert_eq!(stats["total_tests"].as_i64(), Some(4));
    assert_eq!(stats["avg_accuracy"].as_f64(), Some(95.2));
}

#[tokio::test]
async fn reads_are_stable_without_writes() {
    let app = TestApp::spawn().await;
    for (wpm, accuracy) in [(55, 93), (55, 88), (72, 99)] {
        app.submit_wpm(wpm, accuracy).await;
    }

    let first = (app.get("/api/leaderboard").await, app.get("/api/stats").await);
    let second = (app.get("/api/leaderboard").await, app.get("/api/stats").await);
    assert_eq!(first, second);
}

#[tokio::test]
async fn no_mutation_routes_exist() {
    let app = TestApp::spawn().await;
    app.submit(full_payload()).await;

    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let (status, _) = app
            .send(
                Request::builder()
                    .method(method)
                    .uri("/api/save-result")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
    assert_eq!(app.total_tests().await, 1);
}

#[tokio::test]
async fn health_and_index_respond() {
    let app = TestApp::spawn().await;

    app.submit(full_payload()).await;

    let (status, health) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["storage"]["results_table"], true);
    assert_eq!(health["storage"]["stored_results"], 1);

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_missing_results_table() {
    let app = TestApp::spawn_with_schema(false).await;

    let (status, health) = app.get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health["status"], "unavailable");
    assert_eq!(health["storage"]["results_table"], false);
    assert!(health["storage"]["stored_results"].is_null());
}
