use std::sync::Arc;

use billed_db::{SessionStore, Store};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Bill storage.
    pub store: Arc<dyn Store>,
    /// Session key-value store holding the current user.
    pub session: Arc<SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
