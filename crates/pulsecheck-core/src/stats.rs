//! Process introspection capability.
//!
//! The metrics exposition logic only ever talks to this trait, so the
//! renderer stays independent of where the numbers come from (the server
//! reads `/proc`; tests hand in fixed values).

use serde::Serialize;

/// Process memory breakdown, bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MemoryUsage {
    /// Resident set size.
    pub rss_bytes: u64,
    /// Virtual memory size.
    pub vms_bytes: u64,
}

/// System load averages over 1, 5, and 15 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Host introspection surface consumed by the metrics renderer and the
/// `/metrics` JSON handler.
pub trait ProcessStats: Send + Sync {
    /// Seconds since process start.
    fn uptime_seconds(&self) -> f64;
    /// Current memory usage; zeros when the host offers no introspection.
    fn memory_usage(&self) -> MemoryUsage;
    /// System load averages; zeros when unavailable.
    fn load_average(&self) -> LoadAverage;
}
