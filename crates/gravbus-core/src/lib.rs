//! gravbus core: the message envelope, its wire codec, the per-pod filter
//! policy, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies. The broker that
//! routes envelopes between pods lives elsewhere and talks to this crate only
//! through the [`Message`] trait and [`FilterPolicy`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed wire
//! input surfaces as [`GravError`] instead of taking the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod filter;
pub mod message;

pub use error::{ClientCode, GravError, Result};
pub use filter::{FilterDecision, FilterPolicy, FilterSnapshot};
pub use message::{Envelope, Message, DEFAULT_MSG_TYPE};
