//! Rolling request counter.
//!
//! Tracks the total number of requests ever seen plus a 60-second timestamp
//! window for a near-real-time requests-per-second estimate. Eviction is lazy:
//! each `record` drops expired entries from the front before the window is
//! read, so the window stays bounded by the arrival rate.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Width of the recent-rate window.
const WINDOW: Duration = Duration::from_secs(60);

/// Point-in-time view of request accounting, serialized camelCase for the
/// JSON metrics variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSnapshot {
    /// Requests seen since process start.
    pub total: u64,
    /// Lifetime average requests per second, 4 decimal digits.
    pub qps_average: f64,
    /// Requests in the last 60 seconds divided by 60, 4 decimal digits.
    pub qps_last_minute: f64,
    /// Process start time, RFC 3339.
    pub started_at: String,
}

/// Monotonic total plus a rolling 60-second arrival window.
///
/// Mutation happens once per request from the accounting middleware; reads
/// come from the `/metrics` handlers. Interior mutability keeps the counter
/// shareable behind the server's `Arc`-wrapped state.
pub struct RequestCounter {
    total: AtomicU64,
    window: Mutex<VecDeque<Instant>>,
    started_at: DateTime<Utc>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            window: Mutex::new(VecDeque::new()),
            started_at: Utc::now(),
        }
    }

    /// Record one request arriving at `now`.
    ///
    /// Appends to the window, then evicts every entry with
    /// `timestamp <= now - 60s`. The `<=` is deliberate: an entry exactly at
    /// the boundary is excluded. Never fails.
    pub fn record(&self, now: Instant) {
        let mut window = self.lock_window();
        window.push_back(now);
        // checked_sub: `now` may be closer to the clock's origin than 60s.
        if let Some(cutoff) = now.checked_sub(WINDOW) {
            while window.front().map_or(false, |t| *t <= cutoff) {
                window.pop_front();
            }
        }
        drop(window);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Pure read; does not evict. Callers pass the process uptime so the
    /// counter stays independent of the host clock source.
    pub fn snapshot(&self, uptime_seconds: f64) -> RequestSnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let in_window = self.lock_window().len();

        let qps_average = if uptime_seconds > 0.0 {
            round4(total as f64 / uptime_seconds)
        } else {
            0.0
        };

        RequestSnapshot {
            total,
            qps_average,
            qps_last_minute: round4(in_window as f64 / 60.0),
            started_at: self.started_at.to_rfc3339(),
        }
    }

    /// Requests seen since process start.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    fn lock_window(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        // A poisoned lock only means another thread panicked mid-push; the
        // queue itself is still structurally valid.
        match self.window.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 4 decimal digits for display stability.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
