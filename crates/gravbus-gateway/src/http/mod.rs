//! HTTP surface: envelope ingestion and pod filter administration.
//!
//! - `POST /v1/msg`                    : decode an envelope, report admitting pods
//! - `GET  /v1/pods/:pod/filter`       : filter snapshot
//! - `PUT  /v1/pods/:pod/filter/type`  : upsert a type entry
//! - `PUT  /v1/pods/:pod/filter/uuid`  : upsert a uuid entry
//! - `GET  /healthz`                   : liveness

mod error;
mod extract;
mod handlers;

pub use error::ApiError;
pub use extract::{EnvelopeBody, RawBody};
pub use handlers::{
    get_filter, healthz, ingest, put_type_filter, put_uuid_filter, FilterEntry, IngestReply,
};
