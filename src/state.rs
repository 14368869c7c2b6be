use crate::config::Config;
use crate::secrets::SecretStore;
use std::sync::Arc;

/// Shared application state, read-only after construction
#[derive(Clone)]
pub struct AppState {
    pub secrets: Arc<SecretStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            secrets: Arc::new(SecretStore::new(&config.root_flag)),
            config: Arc::new(config),
        }
    }

    pub fn expected_token(&self) -> &str {
        &self.config.expected_token
    }
}
