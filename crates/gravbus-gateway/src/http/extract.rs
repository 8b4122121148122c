//! Request body extractors.
//!
//! The body size limit comes from `DefaultBodyLimit` on the router; going
//! over it is `PayloadTooLarge`, any other body read failure is `Io`.
//! Decode failures are `Decode`, so every endpoint answers with the same
//! `{"code","msg"}` shape.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use gravbus_core::error::{GravError, Result};
use gravbus_core::Envelope;

use super::ApiError;

/// An envelope decoded from the full request body.
#[derive(Debug)]
pub struct EnvelopeBody(pub Envelope);

/// Full request body, not yet decoded.
///
/// Handlers that must resolve a path first (e.g. the pod) take this and
/// call [`RawBody::json`] afterwards.
#[derive(Debug)]
pub struct RawBody(pub Bytes);

impl RawBody {
    /// Decode the body as JSON. Content type is not checked.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.0)
            .map_err(|e| GravError::Decode(format!("invalid json body: {e}")))
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state).await.map_err(|rej| {
        if rej.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GravError::PayloadTooLarge
        } else {
            GravError::Io(rej.body_text())
        }
    })
}

#[async_trait]
impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        Ok(Self(read_body(req, state).await?))
    }
}

#[async_trait]
impl<S> FromRequest<S> for EnvelopeBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let body = read_body(req, state).await?;
        Ok(Self(Envelope::from_bytes(&body)?))
    }
}
