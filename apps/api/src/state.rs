use std::sync::Arc;

use crate::chat::SessionStore;
use crate::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The synthesize → execute → compose pipeline, built once at startup.
    pub pipeline: Arc<Pipeline>,
    /// In-memory per-session transcripts. Lost on process end.
    pub sessions: Arc<SessionStore>,
}
