//! Per-pod message filter.
//!
//! Two independent axes, each a map of key -> allow plus an inclusive flag
//! applied to keys the map does not mention:
//! - type axis: keyed by [`Message::msg_type`]
//! - uuid axis: keyed by [`Message::uuid`]
//!
//! The type axis is always evaluated first and a type denial returns before
//! the uuid axis is consulted. Keep that order when adding axes.
//!
//! Entries are upserted, never removed. Inclusive flags are fixed when the
//! policy is built.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::message::Message;

/// Outcome of [`FilterPolicy::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Allow,
    /// Vetoed by the type axis; the uuid axis was not consulted.
    DenyType,
    DenyUuid,
}

impl FilterDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, FilterDecision::Allow)
    }
}

#[derive(Debug)]
struct Rules {
    type_map: HashMap<String, bool>,
    type_inclusive: bool,
    uuid_map: HashMap<String, bool>,
    uuid_inclusive: bool,
}

impl Rules {
    fn type_allowed(&self, msg_type: &str) -> bool {
        self.type_map
            .get(msg_type)
            .copied()
            .unwrap_or(self.type_inclusive)
    }

    fn uuid_allowed(&self, uuid: &str) -> bool {
        self.uuid_map.get(uuid).copied().unwrap_or(self.uuid_inclusive)
    }
}

/// Point-in-time copy of a policy, taken under a single read lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSnapshot {
    pub type_inclusive: bool,
    pub uuid_inclusive: bool,
    pub types: HashMap<String, bool>,
    pub uuids: HashMap<String, bool>,
}

/// Allow/deny policy owned by one consumption point (pod).
///
/// Any number of `allow` calls run together; `filter_type` / `filter_id`
/// take the lock exclusively. Share via `Arc`.
#[derive(Debug)]
pub struct FilterPolicy {
    rules: RwLock<Rules>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPolicy {
    /// Permissive policy: both axes inclusive, no entries.
    pub fn new() -> Self {
        Self::with_defaults(true, true)
    }

    /// Policy with explicit fallbacks for unlisted types and uuids.
    pub fn with_defaults(type_inclusive: bool, uuid_inclusive: bool) -> Self {
        Self {
            rules: RwLock::new(Rules {
                type_map: HashMap::new(),
                type_inclusive,
                uuid_map: HashMap::new(),
                uuid_inclusive,
            }),
        }
    }

    /// Whether `msg` may be delivered to the owning pod.
    pub fn allow<M: Message + ?Sized>(&self, msg: &M) -> bool {
        self.evaluate(msg).is_allowed()
    }

    /// Same decision as [`FilterPolicy::allow`], reporting which axis vetoed.
    pub fn evaluate<M: Message + ?Sized>(&self, msg: &M) -> FilterDecision {
        let rules = self.read();

        if !rules.type_allowed(msg.msg_type()) {
            tracing::trace!(msg_type = msg.msg_type(), uuid = msg.uuid(), "denied by type filter");
            return FilterDecision::DenyType;
        }

        if !rules.uuid_allowed(msg.uuid()) {
            tracing::trace!(msg_type = msg.msg_type(), uuid = msg.uuid(), "denied by uuid filter");
            return FilterDecision::DenyUuid;
        }

        FilterDecision::Allow
    }

    /// Allow or deny every message of `msg_type`.
    pub fn filter_type(&self, msg_type: impl Into<String>, allow: bool) {
        self.write().type_map.insert(msg_type.into(), allow);
    }

    /// Allow or deny the single message with `uuid`. Rarely needed.
    pub fn filter_id(&self, uuid: impl Into<String>, allow: bool) {
        self.write().uuid_map.insert(uuid.into(), allow);
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        let rules = self.read();
        FilterSnapshot {
            type_inclusive: rules.type_inclusive,
            uuid_inclusive: rules.uuid_inclusive,
            types: rules.type_map.clone(),
            uuids: rules.uuid_map.clone(),
        }
    }

    // Every write is one map insert; poisoned data is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Rules> {
        self.rules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Rules> {
        self.rules.write().unwrap_or_else(PoisonError::into_inner)
    }
}
