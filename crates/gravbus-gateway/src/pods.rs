//! Pod registry: pod id -> filter policy.
//!
//! Built once from config. Delivery to pods happens elsewhere; this only
//! answers which pods a message would be admitted to.

use std::sync::Arc;

use dashmap::DashMap;

use gravbus_core::error::{GravError, Result};
use gravbus_core::{FilterPolicy, Message};

use crate::config::{PodConfig, PodFilterConfig};

#[derive(Default)]
pub struct PodRegistry {
    pods: DashMap<String, Arc<FilterPolicy>>,
}

impl PodRegistry {
    pub fn new() -> Self {
        Self {
            pods: DashMap::new(),
        }
    }

    pub fn from_config(pods: &[PodConfig]) -> Self {
        let reg = Self::new();
        for p in pods {
            reg.insert(p.id.clone(), Arc::new(build_filter(&p.filter)));
        }
        reg
    }

    pub fn insert(&self, pod_id: String, filter: Arc<FilterPolicy>) {
        self.pods.insert(pod_id, filter);
    }

    pub fn get(&self, pod_id: &str) -> Option<Arc<FilterPolicy>> {
        self.pods.get(pod_id).map(|r| Arc::clone(r.value()))
    }

    /// Like [`PodRegistry::get`], but a missing pod is an error.
    pub fn require(&self, pod_id: &str) -> Result<Arc<FilterPolicy>> {
        self.get(pod_id)
            .ok_or_else(|| GravError::UnknownPod(pod_id.to_string()))
    }

    /// Sorted pod ids.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.pods.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Sorted ids of the pods whose filter allows `msg`.
    pub fn admitting<M: Message + ?Sized>(&self, msg: &M) -> Vec<String> {
        // Clone out first so no shard lock is held while filters take theirs.
        let pods: Vec<(String, Arc<FilterPolicy>)> = self
            .pods
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect();

        let mut out: Vec<String> = pods
            .into_iter()
            .filter(|(_, f)| f.allow(msg))
            .map(|(id, _)| id)
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }
}

/// Compile a pod's filter config into a live policy.
pub fn build_filter(cfg: &PodFilterConfig) -> FilterPolicy {
    let filter = FilterPolicy::with_defaults(cfg.type_inclusive, cfg.uuid_inclusive);
    for (msg_type, allow) in &cfg.types {
        filter.filter_type(msg_type.as_str(), *allow);
    }
    for (uuid, allow) in &cfg.uuids {
        filter.filter_id(uuid.as_str(), *allow);
    }
    filter
}
