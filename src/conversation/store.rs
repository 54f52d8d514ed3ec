// ABOUTME: Session store interface injected into the conversation state machine
// ABOUTME: In-memory DashMap implementation with atomic per-key read-modify-write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::ConversationSession;
use dashmap::DashMap;

/// Storage for conversation sessions keyed by session id
///
/// Implementations must make [`SessionStore::update`] atomic per key: a
/// concurrent call for the same id must observe either the state before or
/// after the closure ran, never a lost update.
pub trait SessionStore: Send + Sync {
    /// Copy of a session, `None` if it does not exist
    fn get(&self, session_id: &str) -> Option<ConversationSession>;

    /// Insert or overwrite a session
    fn put(&self, session: ConversationSession);

    /// Remove a session; returns whether one existed
    fn delete(&self, session_id: &str) -> bool;

    /// Run `f` on the session, creating a fresh one if absent
    fn update<R>(&self, session_id: &str, f: impl FnOnce(&mut ConversationSession) -> R) -> R;

    /// Number of live sessions
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local session store
///
/// Sessions live as long as the store; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, ConversationSession>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Option<ConversationSession> {
        self.sessions.get(session_id).map(|s| s.clone())
    }

    fn put(&self, session: ConversationSession) {
        self.sessions.insert(session.session_id.clone(), session);
    }

    fn delete(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    fn update<R>(&self, session_id: &str, f: impl FnOnce(&mut ConversationSession) -> R) -> R {
        // The entry guard holds the shard write lock until `f` returns
        let mut entry = self
            .sessions
            .entry(session_id.to_owned())
            .or_insert_with(|| ConversationSession::new(session_id));
        f(entry.value_mut())
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
