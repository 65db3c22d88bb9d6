//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness
//! - `/`        : informational landing page
//! - `/metrics` : JSON snapshot or Prometheus text, per `METRICS_FORMAT`

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pulsecheck_core::registry::EXPOSITION_CONTENT_TYPE;

use crate::app_state::AppState;
use crate::config::MetricsFormat;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Hello from pulsecheck!",
        "hostname": state.hostname(),
        "version": state.cfg().version,
        "env": state.cfg().env,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.cfg().metrics_format {
        MetricsFormat::Json => {
            let stats = state.stats();
            let uptime = stats.uptime_seconds();
            let load = stats.load_average();

            Json(json!({
                "uptime": uptime,
                "memory": stats.memory_usage(),
                "cpu": [load.one, load.five, load.fifteen],
                "requests": state.counter().snapshot(uptime),
            }))
            .into_response()
        }
        MetricsFormat::Prometheus => {
            let body = state.metrics().render(state.stats());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
                body,
            )
                .into_response()
        }
    }
}
