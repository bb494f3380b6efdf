//! Session Management
//!
//! Sessions hold the append-only turn log for one conversation. They are
//! created on first reference and live for the lifetime of the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::message::{Conversation, Turn};

/// Prefix used for generated session identifiers
pub const DEFAULT_SESSION_PREFIX: &str = "session-";

/// Length of the random suffix appended to generated identifiers
const SUFFIX_LEN: usize = 8;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier: `prefix` followed by 8 random hex chars.
    ///
    /// Uniqueness is probabilistic (32 random bits from a v4 UUID).
    pub fn generate(prefix: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{prefix}{}", &suffix[..SUFFIX_LEN]))
    }

    /// Wrap a caller-supplied identifier verbatim
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate(DEFAULT_SESSION_PREFIX)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A conversation session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// User that opened the session, if known
    pub user_id: Option<String>,

    /// Conversation history
    conversation: Conversation,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session with a specific ID
    pub fn with_id(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: None,
            conversation: Conversation::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a turn and bump the activity timestamp
    pub fn append(&mut self, turn: Turn) {
        self.updated_at = turn.timestamp();
        self.conversation.push(turn);
    }

    /// Turns in conversation order
    pub fn turns(&self) -> &[Turn] {
        self.conversation.turns()
    }

    /// Turn count
    pub fn turn_count(&self) -> usize {
        self.conversation.len()
    }
}

/// Session store
///
/// Implementations must keep each session's turns in append order. A single
/// `append` is atomic; a sequence of appends from one caller is not, so
/// concurrent requests against the same session may interleave.
pub trait SessionStore: Send + Sync {
    /// Return the session for `id`, creating it if unseen.
    ///
    /// Returns `true` when a new session was created.
    fn resolve(&self, id: &SessionId, user_id: Option<&str>) -> bool;

    /// Append a turn, creating the session if needed
    fn append(&self, id: &SessionId, turn: Turn);

    /// Snapshot of a session
    fn get(&self, id: &SessionId) -> Option<Session>;

    /// Number of sessions held
    fn len(&self) -> usize;

    /// List sessions, most recently active first
    fn list(&self, user_id: Option<&str>, limit: usize) -> Vec<Session>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &SessionId) -> bool {
        self.get(id).is_some()
    }

    /// Like [`SessionStore::get`], failing when the session is unknown
    fn require(&self, id: &SessionId) -> Result<Session> {
        self.get(id)
            .ok_or_else(|| CoreError::SessionNotFound(id.to_string()))
    }
}

/// In-memory session store
///
/// Nothing is evicted: sessions persist until the store is dropped.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn resolve(&self, id: &SessionId, user_id: Option<&str>) -> bool {
        let mut sessions = self.sessions.write();
        if sessions.contains_key(id) {
            return false;
        }

        let mut session = Session::with_id(id.clone());
        session.user_id = user_id.map(str::to_owned);
        sessions.insert(id.clone(), session);
        tracing::info!(session_id = %id, "created session");
        true
    }

    fn append(&self, id: &SessionId, turn: Turn) {
        let mut sessions = self.sessions.write();
        sessions
            .entry(id.clone())
            .or_insert_with(|| Session::with_id(id.clone()))
            .append(turn);
    }

    fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.read().get(id).cloned()
    }

    fn len(&self) -> usize {
        self.sessions.read().len()
    }

    fn list(&self, user_id: Option<&str>, limit: usize) -> Vec<Session> {
        let sessions = self.sessions.read();
        let mut result: Vec<_> = sessions
            .values()
            .filter(|s| user_id.is_none_or(|uid| s.user_id.as_deref() == Some(uid)))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        result.truncate(limit);
        result
    }
}
