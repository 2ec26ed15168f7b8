use std::sync::Arc;

use crate::config::Config;
use crate::latex::CompilerConfig;
use crate::llm_client::Assistant;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; no resume data is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model access for analysis and chat. `Unconfigured` when no API key is set.
    pub assistant: Arc<dyn Assistant>,
    pub compiler: CompilerConfig,
}
