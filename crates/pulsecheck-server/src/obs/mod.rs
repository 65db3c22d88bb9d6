//! Request accounting middleware.
//!
//! Wraps every route: before the handler runs, the arrival lands in the
//! rolling counter (so `/metrics` sees the request that fetches it, matching
//! the deployed behavior probes expect); after the response is built, the
//! labeled registry counter is incremented with the final status code.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    // Label with the matched pattern so parameterized routes collapse into
    // one series; unmatched requests (404) fall back to the raw path.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    state.counter().record(Instant::now());
    let response = next.run(req).await;
    state
        .metrics()
        .observe(&method, &route, response.status().as_u16());
    response
}
