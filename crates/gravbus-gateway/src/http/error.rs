//! `GravError` -> HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use gravbus_core::error::{ClientCode, GravError};

/// Handler error; renders as `{"code": "...", "msg": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub GravError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    msg: &'a str,
}

impl From<GravError> for ApiError {
    fn from(e: GravError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let msg = self.0.to_string();
        let body = ErrorBody {
            code: self.0.client_code().as_str(),
            msg: &msg,
        };
        (status, Json(body)).into_response()
    }
}
