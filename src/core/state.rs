// Application state (AppState)

use crate::core::config::Config;
use crate::gateway::Gateway;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state handed to every request handler.
pub struct AppState {
    /// The active datastore adapter
    pub gateway: Gateway,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let gateway = Gateway::from_config(&config.backend)?;

        Ok(Self {
            gateway,
            config: Arc::new(config),
        })
    }
}
