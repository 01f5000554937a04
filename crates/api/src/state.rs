use std::sync::Arc;

use prodgen_core::mockup::MockupSource;
use prodgen_core::submission::ProductStore;

use crate::config::ServerConfig;
use crate::drafts::DraftSessions;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: prodgen_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Open blank item drafts, keyed by session id.
    pub drafts: Arc<DraftSessions>,
    /// Mockup catalog provider.
    pub mockups: Arc<dyn MockupSource>,
    /// Where submitted products are saved.
    pub products: Arc<dyn ProductStore>,
}
