//! Shared error type across gravbus crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed input.
    BadRequest,
    /// Body exceeded the configured limit.
    PayloadTooLarge,
    /// Addressed pod does not exist.
    NotFound,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GravError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum GravError {
    /// Wire payload is not well-formed or a field has the wrong shape.
    #[error("decode failed: {0}")]
    Decode(String),
    /// Reading the input stream failed before decoding started.
    #[error("io: {0}")]
    Io(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unknown pod: {0}")]
    UnknownPod(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl GravError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GravError::Decode(_) => ClientCode::BadRequest,
            GravError::Io(_) => ClientCode::BadRequest,
            GravError::Encode(_) => ClientCode::Internal,
            GravError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            GravError::UnknownPod(_) => ClientCode::NotFound,
            GravError::Config(_) => ClientCode::BadRequest,
            GravError::UnsupportedVersion => ClientCode::BadRequest,
        }
    }
}

impl From<std::io::Error> for GravError {
    fn from(e: std::io::Error) -> Self {
        GravError::Io(e.to_string())
    }
}
