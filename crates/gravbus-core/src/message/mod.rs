//! Message capability set and the built-in envelope.
//!
//! The broker and [`crate::FilterPolicy`] only ever see [`Message`].
//! Applications that need their own wire layout implement the trait on
//! their own type; [`Envelope`] is the default implementation.

mod envelope;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::Result;

pub use envelope::Envelope;

/// Built-in message type for applications without their own classification.
pub const DEFAULT_MSG_TYPE: &str = "grav.default";

/// Capability set every message on the bus exposes.
pub trait Message: Send + Sync {
    /// Unique id of this message.
    fn uuid(&self) -> &str;
    /// Id of the external event (e.g. an inbound request) that caused it, or "".
    fn parent_id(&self) -> &str;
    /// Uuid of the message this one answers, or "".
    fn response_to(&self) -> &str;
    /// Application-specific type; drives routing and filtering.
    fn msg_type(&self) -> &str;
    /// Time the message was emitted.
    fn timestamp(&self) -> DateTime<Utc>;
    /// Raw payload.
    fn data(&self) -> &[u8];
    /// Encode into the wire format.
    fn marshal(&self) -> Result<Vec<u8>>;
    /// Replace this value with one decoded from `bytes`.
    ///
    /// Only call on a value nobody else can observe yet.
    fn unmarshal(&mut self, bytes: &[u8]) -> Result<()>;
}

/// New boxed default message of `msg_type`.
pub fn new_msg(msg_type: impl Into<String>, data: impl Into<Bytes>) -> Box<dyn Message> {
    Box::new(Envelope::new(msg_type, data))
}

/// New boxed default message carrying a parent id.
pub fn new_msg_with_parent_id(
    msg_type: impl Into<String>,
    parent_id: impl Into<String>,
    data: impl Into<Bytes>,
) -> Box<dyn Message> {
    Box::new(Envelope::with_parent_id(msg_type, parent_id, data))
}

/// New boxed default message answering `response_to`.
pub fn new_msg_response_to(
    msg_type: impl Into<String>,
    response_to: impl Into<String>,
    data: impl Into<Bytes>,
) -> Box<dyn Message> {
    Box::new(Envelope::in_response_to(msg_type, response_to, data))
}
