//! pulsecheck server
//!
//! Minimal demonstration HTTP service for validating deployment pipelines:
//! - `GET /health`  : liveness probe
//! - `GET /`        : landing page (hostname, version, env)
//! - `GET /metrics` : request/process metrics (JSON or Prometheus text)

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use pulsecheck_server::{app_state::AppState, config, host, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fail fast on malformed configuration; never bind a wrong port.
    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration rejected");
            std::process::exit(1);
        }
    };

    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let state = AppState::new(cfg, Box::new(host::HostStats::new()));
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");
    tracing::info!(port = listen.port(), "pulsecheck listening");

    axum::serve(listener, app).await.expect("server failed");
}
