use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use gravbus_core::{FilterSnapshot, Message};

use super::{ApiError, EnvelopeBody, RawBody};
use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[derive(Debug, Serialize)]
pub struct IngestReply {
    pub uuid: String,
    pub msg_type: String,
    /// Pods whose filter admits the message, sorted.
    pub pods: Vec<String>,
}

pub async fn ingest(
    State(state): State<AppState>,
    EnvelopeBody(env): EnvelopeBody,
) -> Json<IngestReply> {
    let pods = state.pods().admitting(&env);

    tracing::debug!(
        uuid = env.uuid(),
        msg_type = env.msg_type(),
        parent_id = env.parent_id(),
        admitted = pods.len(),
        "envelope ingested"
    );

    Json(IngestReply {
        uuid: env.uuid().to_string(),
        msg_type: env.msg_type().to_string(),
        pods,
    })
}

/// Body of the filter upsert endpoints.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterEntry {
    pub key: String,
    pub allow: bool,
}

pub async fn get_filter(
    State(state): State<AppState>,
    Path(pod): Path<String>,
) -> Result<Json<FilterSnapshot>, ApiError> {
    let filter = state.pods().require(&pod)?;
    Ok(Json(filter.snapshot()))
}

pub async fn put_type_filter(
    State(state): State<AppState>,
    Path(pod): Path<String>,
    body: RawBody,
) -> Result<StatusCode, ApiError> {
    let filter = state.pods().require(&pod)?;
    let entry: FilterEntry = body.json()?;
    tracing::info!(pod = %pod, msg_type = %entry.key, allow = entry.allow, "type filter set");
    filter.filter_type(entry.key, entry.allow);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn put_uuid_filter(
    State(state): State<AppState>,
    Path(pod): Path<String>,
    body: RawBody,
) -> Result<StatusCode, ApiError> {
    let filter = state.pods().require(&pod)?;
    let entry: FilterEntry = body.json()?;
    tracing::info!(pod = %pod, uuid = %entry.key, allow = entry.allow, "uuid filter set");
    filter.filter_id(entry.key, entry.allow);
    Ok(StatusCode::NO_CONTENT)
}
