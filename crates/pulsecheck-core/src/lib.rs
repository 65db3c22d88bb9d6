//! pulsecheck core: request accounting, metrics aggregation, and error types.
//!
//! This crate holds the transport-agnostic pieces of the service: the rolling
//! request counter, the labeled metrics registry with its Prometheus text
//! renderer, and the `ProcessStats` capability trait that keeps exposition
//! logic independent of the host's introspection API. It carries no HTTP or
//! runtime dependencies so it can be exercised directly from tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulseError`/`Result` so production
//! processes do not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod registry;
pub mod stats;

/// Shared result type.
pub use error::{PulseError, Result};
