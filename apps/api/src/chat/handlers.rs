use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::TranscriptEntry;
use crate::errors::AppError;
use crate::state::AppState;

/// Shown when the submitted message is empty; the pipeline is not invoked.
pub const EMPTY_MESSAGE_PROMPT: &str = "Please enter a description of your symptoms.";

#[derive(Deserialize)]
pub struct ChatRequest {
    /// Omitted on the first turn; the response carries the id to reuse.
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation(EMPTY_MESSAGE_PROMPT.to_string()));
    }

    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);

    let answer = state.pipeline.answer_symptoms(message).await;

    state
        .sessions
        .append(session_id, message.to_string(), answer.clone())
        .await;

    Ok(Json(ChatResponse { session_id, answer }))
}

/// GET /api/v1/chat/:session_id/transcript
pub async fn handle_get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Vec<TranscriptEntry>>, AppError> {
    state
        .sessions
        .transcript(session_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}
