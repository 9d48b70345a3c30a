//! Session-scoped chat transcripts.
//!
//! Each session owns an ordered, append-only log of question/answer pairs.
//! Sessions live in memory for the life of the process and share nothing with
//! each other; only the chat handler appends, and entries are never mutated
//! once written.

pub mod handlers;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One past question/answer pair. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// In-memory map of session id → transcript. Insertion order within a
/// transcript is submission order; it is never reordered or deduplicated.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Vec<TranscriptEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one turn to the session's transcript, creating the session on
    /// first use.
    pub async fn append(&self, session_id: Uuid, question: String, answer: String) {
        let entry = TranscriptEntry {
            question,
            answer,
            asked_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .entry(session_id)
            .or_default()
            .push(entry);
    }

    /// Returns a snapshot of the session's transcript, or `None` for an
    /// unknown session.
    pub async fn transcript(&self, session_id: Uuid) -> Option<Vec<TranscriptEntry>> {
        self.sessions.read().await.get(&session_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transcript_preserves_insertion_order() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        store.append(id, "q1".into(), "a1".into()).await;
        store.append(id, "q2".into(), "a2".into()).await;
        store.append(id, "q3".into(), "a3".into()).await;

        let transcript = store.transcript(id).await.unwrap();
        let questions: Vec<&str> = transcript.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, ["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.append(a, "a-q1".into(), "a-a1".into()).await;
        store.append(b, "b-q1".into(), "b-a1".into()).await;
        store.append(a, "a-q2".into(), "a-a2".into()).await;

        let ta = store.transcript(a).await.unwrap();
        let tb = store.transcript(b).await.unwrap();

        assert_eq!(ta.len(), 2);
        assert_eq!(tb.len(), 1);
        assert!(ta.iter().all(|e| e.question.starts_with("a-")));
        assert!(tb.iter().all(|e| e.question.starts_with("b-")));
    }

    #[tokio::test]
    async fn test_unknown_session_has_no_transcript() {
        let store = SessionStore::new();
        assert!(store.transcript(Uuid::new_v4()).await.is_none());
    }
}
