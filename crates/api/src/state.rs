use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the configuration sits behind an `Arc` and is never
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the negotiation middleware on every request).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
