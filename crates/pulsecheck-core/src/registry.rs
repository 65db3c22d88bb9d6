//! Minimal metrics registry.
//!
//! Counter series with dynamic labels backed by `DashMap`; labels are
//! flattened into sorted key vectors and series are sorted at render time so
//! the exposition output is deterministic. Process-level gauges are computed
//! on demand through [`ProcessStats`] rather than stored.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::stats::ProcessStats;

/// Content type a pull-based scraper expects for the text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Labeled monotonic counter family.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1, creating the series if absent.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series, 0 when the series does not exist.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map_or(0, |c| c.value().load(Ordering::Relaxed))
    }

    /// Render in Prometheus text exposition format, series sorted by label.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut series: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        series.sort();

        for (labels, val) in series {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

/// Write one unlabeled gauge family.
fn write_gauge(out: &mut String, name: &str, help: &str, value: f64) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} gauge", name);
    let _ = writeln!(out, "{} {}", name, value);
}

/// Registry of all metric families the service exports.
///
/// One user-defined labeled counter (per method/route/status) plus default
/// process gauges pulled from [`ProcessStats`] at render time. Series are
/// created on first observation and never removed; the label set is bounded
/// because routes are a small fixed set.
#[derive(Default)]
pub struct ServiceMetrics {
    pub http_requests: CounterVec,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request. Called after the response is built so
    /// the final status code is known.
    pub fn observe(&self, method: &str, route: &str, status_code: u16) {
        self.http_requests.inc(&[
            ("method", method),
            ("route", route),
            ("status_code", &status_code.to_string()),
        ]);
    }

    /// Render every family as one exposition document. Deterministic: two
    /// renders with no intervening traffic and the same stats are identical.
    pub fn render(&self, stats: &dyn ProcessStats) -> String {
        let mut out = String::new();

        self.http_requests.render(
            "pulsecheck_http_requests_total",
            "Total HTTP requests by method, route, and status code.",
            &mut out,
        );

        let mem = stats.memory_usage();
        let load = stats.load_average();

        write_gauge(
            &mut out,
            "pulsecheck_process_uptime_seconds",
            "Seconds since process start.",
            stats.uptime_seconds(),
        );
        write_gauge(
            &mut out,
            "pulsecheck_process_resident_memory_bytes",
            "Resident set size.",
            mem.rss_bytes as f64,
        );
        write_gauge(
            &mut out,
            "pulsecheck_process_virtual_memory_bytes",
            "Virtual memory size.",
            mem.vms_bytes as f64,
        );
        write_gauge(&mut out, "pulsecheck_load1", "1-minute load average.", load.one);
        write_gauge(&mut out, "pulsecheck_load5", "5-minute load average.", load.five);
        write_gauge(
            &mut out,
            "pulsecheck_load15",
            "15-minute load average.",
            load.fifteen,
        );

        out
    }
}
