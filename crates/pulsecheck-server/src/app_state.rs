//! Shared application state.
//!
//! The counter, registry, and stats source are constructed once at startup
//! and injected into the request path through axum state; there are no
//! ambient globals. Cloning is cheap (one `Arc`).

use std::sync::Arc;

use pulsecheck_core::counter::RequestCounter;
use pulsecheck_core::registry::ServiceMetrics;
use pulsecheck_core::stats::ProcessStats;

use crate::config::ServerConfig;
use crate::host;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    hostname: String,
    counter: RequestCounter,
    metrics: ServiceMetrics,
    stats: Box<dyn ProcessStats>,
}

impl AppState {
    /// Build application state around a stats source. The server passes
    /// `HostStats`; tests pass a fixed implementation.
    pub fn new(cfg: ServerConfig, stats: Box<dyn ProcessStats>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                hostname: host::hostname(),
                counter: RequestCounter::new(),
                metrics: ServiceMetrics::new(),
                stats,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn hostname(&self) -> &str {
        &self.inner.hostname
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.inner.counter
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn stats(&self) -> &dyn ProcessStats {
        self.inner.stats.as_ref()
    }
}
