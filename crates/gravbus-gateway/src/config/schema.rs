use std::collections::{BTreeMap, HashSet};
use std::net::SocketAddr;

use serde::Deserialize;
use gravbus_core::error::{GravError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub pods: Vec<PodConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GravError::UnsupportedVersion);
        }
        if self.pods.is_empty() {
            return Err(GravError::Config("pods must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for pod in &self.pods {
            if pod.id.trim().is_empty() {
                return Err(GravError::Config("pod id must not be empty".into()));
            }
            if !seen.insert(pod.id.as_str()) {
                return Err(GravError::Config(format!("duplicate pod id: {}", pod.id)));
            }
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=64 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(GravError::Config(
                "gateway.max_body_bytes must be between 1024 and 67108864".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            GravError::Config(format!("gateway.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PodConfig {
    pub id: String,
    #[serde(default)]
    pub filter: PodFilterConfig,
}

/// Initial filter state for one pod. Inclusive flags cannot change later.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PodFilterConfig {
    #[serde(default = "default_inclusive")]
    pub type_inclusive: bool,
    #[serde(default = "default_inclusive")]
    pub uuid_inclusive: bool,
    #[serde(default)]
    pub types: BTreeMap<String, bool>,
    #[serde(default)]
    pub uuids: BTreeMap<String, bool>,
}

impl Default for PodFilterConfig {
    fn default() -> Self {
        Self {
            type_inclusive: default_inclusive(),
            uuid_inclusive: default_inclusive(),
            types: BTreeMap::new(),
            uuids: BTreeMap::new(),
        }
    }
}

fn default_inclusive() -> bool {
    true
}
