//! Server config loader (strict parsing).
//!
//! Configuration is environment-style with documented defaults:
//!
//! | Variable         | Default         | Meaning                              |
//! |------------------|-----------------|--------------------------------------|
//! | `PORT`           | `3000`          | Listen port (all interfaces)         |
//! | `APP_VERSION`    | `"1.0.0"`       | Version reported by `GET /`          |
//! | `APP_ENV`        | `"development"` | Environment name reported by `GET /` |
//! | `METRICS_FORMAT` | `"json"`        | `/metrics` variant: `json` or `prometheus` |
//!
//! Malformed values are a startup error; the process must fail fast with a
//! clear message rather than silently binding a wrong port.

pub mod schema;

use pulsecheck_core::error::{PulseError, Result};

pub use schema::{MetricsFormat, ServerConfig, DEFAULT_ENV, DEFAULT_PORT, DEFAULT_VERSION};

/// Load configuration from the process environment.
pub fn from_env() -> Result<ServerConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary lookup, so tests stay hermetic.
/// Empty and whitespace-only values are treated as unset.
pub fn from_lookup<F>(lookup: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let port = match get("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| {
                PulseError::Config(format!(
                    "PORT must be an integer between 1 and 65535, got {raw:?}"
                ))
            })?,
        None => DEFAULT_PORT,
    };

    let version = get("APP_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());
    let env = get("APP_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());

    let metrics_format = match get("METRICS_FORMAT") {
        None => MetricsFormat::Json,
        Some(raw) if raw.trim().eq_ignore_ascii_case("json") => MetricsFormat::Json,
        Some(raw) if raw.trim().eq_ignore_ascii_case("prometheus") => MetricsFormat::Prometheus,
        Some(raw) => {
            return Err(PulseError::Config(format!(
                "METRICS_FORMAT must be \"json\" or \"prometheus\", got {raw:?}"
            )))
        }
    };

    Ok(ServerConfig {
        port,
        version,
        env,
        metrics_format,
    })
}
