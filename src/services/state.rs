use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared, read-only application state. Holds no conversation data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
