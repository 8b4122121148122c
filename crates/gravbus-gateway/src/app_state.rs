//! Shared application state for the gravbus gateway.

use std::sync::Arc;

use gravbus_core::error::Result;

use crate::config::GatewayConfig;
use crate::pods::PodRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    pods: PodRegistry,
}

impl AppState {
    /// Build application state.
    ///
    /// `cfg` is validated here as well, since it may be built in code
    /// rather than through `config::load_from_str`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let pods = PodRegistry::from_config(&cfg.pods);

        for id in pods.ids() {
            tracing::info!(pod = %id, "pod filter loaded");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, pods }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn pods(&self) -> &PodRegistry {
        &self.inner.pods
    }
}
