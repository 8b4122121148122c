//! Top-level facade crate for gravbus.
//!
//! Re-exports the core message/filter types and the gateway library so users
//! can depend on a single crate.

pub mod core {
    pub use gravbus_core::*;
}

pub mod gateway {
    pub use gravbus_gateway::*;
}
