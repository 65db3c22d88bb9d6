//! Shared error type across pulsecheck crates.
//!
//! The service has no domain error taxonomy: handlers are total functions
//! over their inputs. What remains is configuration rejection at startup and
//! a catch-all for runtime plumbing.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Malformed configuration value. Startup must fail fast with this
    /// rather than silently binding a wrong port or serving a wrong format.
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
