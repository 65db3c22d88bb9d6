//! pulsecheck server library entry.
//!
//! This crate wires configuration, host introspection, the axum router, and
//! the request-accounting middleware into the deployable service. It is
//! consumed by the binary (`main.rs`) and by integration tests, which drive
//! the router in-process without binding a socket.

pub mod app_state;
pub mod config;
pub mod host;
pub mod obs;
pub mod ops;
pub mod router;
