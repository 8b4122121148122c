//! gravbus gateway library entry.
//!
//! HTTP edge of the bus: decodes inbound envelopes, evaluates them against
//! each configured pod's filter, and exposes the administrative filter
//! mutators. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod pods;
pub mod router;
