use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatTransport;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat transport, trait-typed so tests can swap in a mock without a
    /// running model server.
    pub llm: Arc<dyn ChatTransport>,
    pub config: Config,
}
