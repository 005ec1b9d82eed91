//! In-memory session table.

use std::collections::HashMap;
use std::sync::Arc;

use gym_models::AnalysisSession;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Row store for analysis sessions, keyed by session ID and scoped to the
/// owning user on every read.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    rows: Arc<RwLock<HashMap<String, AnalysisSession>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new session. Sessions are append-only; re-inserting an
    /// existing ID is a conflict, never an overwrite.
    pub async fn create(&self, session: AnalysisSession) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&session.id) {
            return Err(StoreError::Conflict(session.id));
        }
        debug!(session_id = %session.id, user_id = %session.user_id, "session created");
        rows.insert(session.id.clone(), session);
        Ok(())
    }

    /// Fetch one session, scoped to its owner.
    pub async fn get(&self, user_id: &str, session_id: &str) -> Option<AnalysisSession> {
        let rows = self.rows.read().await;
        rows.get(session_id)
            .filter(|s| s.user_id == user_id)
            .cloned()
    }

    /// List a user's sessions newest-first with limit/offset pagination.
    pub async fn list(&self, user_id: &str, limit: usize, offset: usize) -> Vec<AnalysisSession> {
        let rows = self.rows.read().await;
        let mut sessions: Vec<AnalysisSession> = rows
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sessions.into_iter().skip(offset).take(limit).collect()
    }

    /// Number of sessions a user owns.
    pub async fn count(&self, user_id: &str) -> usize {
        let rows = self.rows.read().await;
        rows.values().filter(|s| s.user_id == user_id).count()
    }

    /// Delete one session, scoped to its owner.
    pub async fn delete(&self, user_id: &str, session_id: &str) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        match rows.get(session_id) {
            Some(s) if s.user_id == user_id => {
                rows.remove(session_id);
                debug!(session_id, user_id, "session deleted");
                Ok(())
            }
            _ => Err(StoreError::NotFound(session_id.to_string())),
        }
    }
}
