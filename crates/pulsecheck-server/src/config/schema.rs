/// Listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// Version string when `APP_VERSION` is unset.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Environment name when `APP_ENV` is unset.
pub const DEFAULT_ENV: &str = "development";

/// Which payload `GET /metrics` serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsFormat {
    /// Hand-built JSON snapshot (uptime, memory, load, request counts).
    #[default]
    Json,
    /// Text exposition format for a pull-based scraper.
    Prometheus,
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub version: String,
    pub env: String,
    pub metrics_format: MetricsFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            version: DEFAULT_VERSION.to_string(),
            env: DEFAULT_ENV.to_string(),
            metrics_format: MetricsFormat::Json,
        }
    }
}
