use std::sync::Arc;

use script_intake_core::store::ScriptStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination for created script records.
    pub store: Arc<ScriptStore>,
}

impl AppState {
    /// Build state whose store writes into `config.scripts_dir`.
    pub fn new(config: ServerConfig) -> Self {
        let store = ScriptStore::new(config.scripts_dir.clone());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
