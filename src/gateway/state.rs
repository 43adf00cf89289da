use std::sync::Arc;

use crate::{Config, Format, client::BackendClient};

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: BackendClient,
    pub format: Format,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            config: Arc::new(Config::default()),
            backend,
            format: Format::default(),
        }
    }

    /// Builds the backend client from `config` and keeps the config alongside it.
    pub fn from_config(config: Config) -> eyre::Result<Self> {
        let backend = BackendClient::new(&config.backend)?;
        Ok(Self::new(backend).with_config(config))
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Arc::new(config);
        self
    }
}
