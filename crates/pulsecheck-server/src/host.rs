//! Host process introspection.
//!
//! Implements the `ProcessStats` capability against the local `/proc`
//! filesystem. Every reader degrades to zeros when the host offers no
//! introspection (non-Linux, restricted container), so the metrics endpoints
//! stay total.

use std::fs;
use std::time::Instant;

use pulsecheck_core::stats::{LoadAverage, MemoryUsage, ProcessStats};

/// `ProcessStats` backed by the hosting OS.
pub struct HostStats {
    started: Instant,
}

impl HostStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for HostStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessStats for HostStats {
    fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn memory_usage(&self) -> MemoryUsage {
        read_self_status().unwrap_or_default()
    }

    fn load_average(&self) -> LoadAverage {
        read_loadavg().unwrap_or_default()
    }
}

/// VmRSS / VmSize from `/proc/self/status`, reported there in kB.
fn read_self_status() -> Option<MemoryUsage> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    let mut mem = MemoryUsage::default();
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            mem.rss_bytes = parse_kib(rest)?;
        } else if let Some(rest) = line.strip_prefix("VmSize:") {
            mem.vms_bytes = parse_kib(rest)?;
        }
    }
    Some(mem)
}

fn parse_kib(field: &str) -> Option<u64> {
    let kib: u64 = field.trim().trim_end_matches("kB").trim().parse().ok()?;
    Some(kib * 1024)
}

/// First three fields of `/proc/loadavg`.
fn read_loadavg() -> Option<LoadAverage> {
    let raw = fs::read_to_string("/proc/loadavg").ok()?;
    let mut fields = raw.split_whitespace();
    Some(LoadAverage {
        one: fields.next()?.parse().ok()?,
        five: fields.next()?.parse().ok()?,
        fifteen: fields.next()?.parse().ok()?,
    })
}

/// Hostname as seen by the execution environment: `$HOSTNAME` if set
/// (containers export it), then the kernel's node name, then `"unknown"`.
pub fn hostname() -> String {
    if let Ok(name) = std::env::var("HOSTNAME") {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    if let Ok(name) = fs::read_to_string("/proc/sys/kernel/hostname") {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    "unknown".to_string()
}
