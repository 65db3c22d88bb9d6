#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pulsecheck_core::stats::{LoadAverage, MemoryUsage, ProcessStats};
use pulsecheck_server::app_state::AppState;
use pulsecheck_server::config::{MetricsFormat, ServerConfig};
use pulsecheck_server::router;

/// Fixed-value stats so responses are predictable.
struct FixedStats;

impl ProcessStats for FixedStats {
    fn uptime_seconds(&self) -> f64 {
        12.5
    }
    fn memory_usage(&self) -> MemoryUsage {
        MemoryUsage {
            rss_bytes: 1_048_576,
            vms_bytes: 4_194_304,
        }
    }
    fn load_average(&self) -> LoadAverage {
        LoadAverage {
            one: 0.42,
            five: 0.21,
            fifteen: 0.1,
        }
    }
}

fn app_with(cfg: ServerConfig) -> (AppState, Router) {
    let state = AppState::new(cfg, Box::new(FixedStats));
    let app = router::build_router(state.clone());
    (state, app)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_is_always_200_with_fresh_timestamp() {
    let (_, app) = app_with(ServerConfig::default());

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let ts = chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .expect("timestamp must be RFC 3339");
    let skew = (chrono::Utc::now() - ts.with_timezone(&chrono::Utc)).num_milliseconds();
    assert!((0..1000).contains(&skew), "timestamp skew {skew}ms");
}

#[tokio::test]
async fn root_reports_configured_identity() {
    let (_, app) = app_with(ServerConfig::default());

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["env"], "development");
    assert!(!body["hostname"].as_str().unwrap().is_empty());
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn root_reflects_version_override() {
    let cfg = ServerConfig {
        version: "2.3.1".to_string(),
        ..ServerConfig::default()
    };
    let (_, app) = app_with(cfg);

    let (_, body) = get_json(&app, "/").await;
    assert_eq!(body["version"], "2.3.1");
}

#[tokio::test]
async fn metrics_json_counts_the_request_that_fetches_it() {
    let (_, app) = app_with(ServerConfig::default());

    get(&app, "/").await;
    get(&app, "/").await;

    let (status, body) = get_json(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uptime"], 12.5);
    assert_eq!(body["memory"]["rss_bytes"], 1_048_576);
    assert_eq!(body["memory"]["vms_bytes"], 4_194_304);
    assert_eq!(body["cpu"][0], 0.42);
    assert_eq!(body["cpu"][2], 0.1);

    // Accounting runs before the handler, so the fetch itself is counted.
    assert_eq!(body["requests"]["total"], 3);
    assert_eq!(body["requests"]["qpsLastMinute"], 0.05);
    assert_eq!(body["requests"]["qpsAverage"], 0.24); // 3 / 12.5
    assert!(body["requests"]["startedAt"].is_string());
}

#[tokio::test]
async fn metrics_prometheus_variant_serves_exposition_text() {
    let cfg = ServerConfig {
        metrics_format: MetricsFormat::Prometheus,
        ..ServerConfig::default()
    };
    let (_, app) = app_with(cfg);

    for _ in 0..3 {
        get(&app, "/").await;
    }
    get(&app, "/health").await;

    let (status, headers, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers["content-type"],
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains(
        "pulsecheck_http_requests_total{method=\"GET\",route=\"/\",status_code=\"200\"} 3"
    ));
    assert!(text.contains(
        "pulsecheck_http_requests_total{method=\"GET\",route=\"/health\",status_code=\"200\"} 1"
    ));
    // The labeled counter is bumped on completion, so the in-flight scrape
    // is not yet visible in its own output.
    assert!(!text.contains("route=\"/metrics\""));
    assert!(text.contains("pulsecheck_process_uptime_seconds 12.5"));
}

#[tokio::test]
async fn unknown_route_is_404_and_labeled_with_raw_path() {
    let (state, app) = app_with(ServerConfig::default());

    let (status, _, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let labels = [("method", "GET"), ("route", "/nope"), ("status_code", "404")];
    assert_eq!(state.metrics().http_requests.get(&labels), 1);
}

#[tokio::test]
async fn counter_total_matches_middleware_invocations() {
    let (state, app) = app_with(ServerConfig::default());

    get(&app, "/").await;
    get(&app, "/health").await;
    get(&app, "/nope").await;
    get(&app, "/metrics").await;

    assert_eq!(state.counter().total(), 4);
}
