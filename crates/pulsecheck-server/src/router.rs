//! Axum router wiring.
//!
//! Three GET routes, each wrapped by the accounting middleware. Anything
//! else falls through to axum's default 404.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track))
        .with_state(state)
}
