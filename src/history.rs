//! Session interaction log
//!
//! Append-only record of past categorizations and queries, kept per
//! session for display. The engine itself never reads it back; handlers
//! append results and the UI renders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// What kind of interaction produced a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Categorization,
    Query,
}

/// A single past interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub record_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: InteractionKind,
    pub question: String,
    pub answer: String,
}

impl InteractionRecord {
    pub fn new(kind: InteractionKind, question: String, answer: String) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            question,
            answer,
        }
    }
}

/// Ordered history of one session's interactions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionLog {
    records: Vec<InteractionRecord>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) append; past records are never edited.
    pub fn append(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    /// Wholesale reset. There is no partial deletion.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory per-session logs. Each session gets its own log; sessions
/// never share state.
#[derive(Clone, Default)]
pub struct SessionStore {
    logs: Arc<RwLock<HashMap<Uuid, InteractionLog>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, session_id: Uuid, record: InteractionRecord) {
        let mut logs = self.logs.write().await;
        logs.entry(session_id)
            .or_insert_with(InteractionLog::new)
            .append(record);
    }

    /// Snapshot of a session's records, oldest first. Unknown sessions
    /// yield an empty list.
    pub async fn snapshot(&self, session_id: Uuid) -> Vec<InteractionRecord> {
        let logs = self.logs.read().await;
        logs.get(&session_id)
            .map(|log| log.records().to_vec())
            .unwrap_or_default()
    }

    pub async fn clear(&self, session_id: Uuid) {
        let mut logs = self.logs.write().await;
        if let Some(log) = logs.get_mut(&session_id) {
            log.clear();
        }
    }
}
