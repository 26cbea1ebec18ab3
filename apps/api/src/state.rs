use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CopyModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `HfClient`. Tests substitute stubs.
    pub model: Arc<dyn CopyModel>,
    pub config: Config,
}
