//! Axum router wiring.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().gateway.max_body_bytes;

    Router::new()
        .route("/healthz", get(http::healthz))
        .route("/v1/msg", post(http::ingest))
        .route("/v1/pods/:pod/filter", get(http::get_filter))
        .route("/v1/pods/:pod/filter/type", put(http::put_type_filter))
        .route("/v1/pods/:pod/filter/uuid", put(http::put_uuid_filter))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
