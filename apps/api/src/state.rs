use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; handlers hold no state across calls.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion provider. Production: `GeminiClient`.
    /// Tests swap in stub implementations.
    pub llm: Arc<dyn CompletionService>,
}
