use std::sync::Arc;

use sections_core::design_pattern::DesignPatternService;
use sections_core::store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Design pattern use cases.
    pub design_patterns: Arc<dyn DesignPatternService>,
    /// Document store, used directly only for health reporting.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
