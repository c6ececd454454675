use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match engine. Default: OverlapEngine.
    pub matcher: Arc<dyn MatchEngine>,
}
