//! Default envelope (JSON wire format).
//!
//! Wire layout:
//! ```json
//! {
//!   "meta": {
//!     "uuid": "...", "parent_id": "...", "response_to": "...",
//!     "msg_type": "...", "timestamp": "<RFC3339>"
//!   },
//!   "payload": { "data": "<base64>" }
//! }
//! ```
//! Missing or `null` members decode to empty values (a missing timestamp is
//! `0001-01-01T00:00:00Z`); members of the wrong shape are rejected.
//! Unknown members are ignored.

use std::io::Read;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::Message;
use crate::error::{GravError, Result};

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch.
const ZERO_TIME_UNIX_SECS: i64 = -62_135_596_800;

/// Built-in [`Message`] implementation.
///
/// Fields are fixed at construction. The payload is `Bytes`, so cloning an
/// envelope for fan-out shares the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "null_as_default")]
    meta: Meta,
    #[serde(default, deserialize_with = "null_as_default")]
    payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Meta {
    #[serde(deserialize_with = "null_as_default")]
    uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    parent_id: String,
    #[serde(deserialize_with = "null_as_default")]
    response_to: String,
    #[serde(deserialize_with = "null_as_default")]
    msg_type: String,
    #[serde(deserialize_with = "null_as_zero_time")]
    timestamp: DateTime<Utc>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            uuid: String::new(),
            parent_id: String::new(),
            response_to: String::new(),
            msg_type: String::new(),
            timestamp: zero_time(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct Payload {
    #[serde(with = "base64_bytes")]
    data: Bytes,
}

/// Timestamp of an envelope that never carried one.
fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ZERO_TIME_UNIX_SECS, 0).unwrap_or_default()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero_time<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(zero_time))
}

impl Envelope {
    /// Fresh envelope with a random v4 uuid and the current time.
    pub fn new(msg_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::build(msg_type.into(), String::new(), String::new(), data.into())
    }

    /// Like [`Envelope::new`], recording the external event that caused it.
    pub fn with_parent_id(
        msg_type: impl Into<String>,
        parent_id: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::build(msg_type.into(), parent_id.into(), String::new(), data.into())
    }

    /// Like [`Envelope::new`], answering the message with uuid `response_to`.
    pub fn in_response_to(
        msg_type: impl Into<String>,
        response_to: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::build(msg_type.into(), String::new(), response_to.into(), data.into())
    }

    fn build(msg_type: String, parent_id: String, response_to: String, data: Bytes) -> Self {
        Self {
            meta: Meta {
                uuid: Uuid::new_v4().to_string(),
                parent_id,
                response_to,
                msg_type,
                timestamp: Utc::now(),
            },
            payload: Payload { data },
        }
    }

    /// Decode an envelope from its wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| GravError::Decode(format!("invalid envelope json: {e}")))
    }

    /// Read `reader` to the end (e.g. an HTTP request body) and decode it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }
}

impl Message for Envelope {
    fn uuid(&self) -> &str {
        &self.meta.uuid
    }

    fn parent_id(&self) -> &str {
        &self.meta.parent_id
    }

    fn response_to(&self) -> &str {
        &self.meta.response_to
    }

    fn msg_type(&self) -> &str {
        &self.meta.msg_type
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.meta.timestamp
    }

    fn data(&self) -> &[u8] {
        &self.payload.data
    }

    fn marshal(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| GravError::Encode(format!("envelope json: {e}")))
    }

    fn unmarshal(&mut self, bytes: &[u8]) -> Result<()> {
        // Decode into a fresh value first so a failed decode leaves self intact.
        *self = Self::from_bytes(bytes)?;
        Ok(())
    }
}

/// Serde helper for `Bytes` - serializes as standard padded base64.
/// `null` decodes to an empty payload.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(s) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Bytes::new());
        };
        STANDARD
            .decode(s.as_bytes())
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}
