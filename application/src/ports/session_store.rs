//! Port for per-session delivery state persistence.
//!
//! One document per session. Reads are deliberately tolerant: a missing,
//! unreadable, or corrupt document folds to "no state" so that a damaged
//! file degrades to a fresh start instead of wedging every command.
//! Writes are fallible and must replace the document atomically, so a
//! crash mid-write never leaves a torn document behind.

use foreman_domain::{DeliveryState, SessionId};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Why a session document could not be written.
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("could not persist session state: {0}")]
    Write(#[source] std::io::Error),

    #[error("could not encode session state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Port for the per-session state document.
pub trait SessionStore: Send + Sync {
    /// Read the session's delivery state; absent and unreadable are the
    /// same answer.
    fn load(&self, session: &SessionId) -> Option<DeliveryState>;

    /// Atomically replace the session's delivery state.
    fn save(&self, session: &SessionId, state: &DeliveryState)
    -> Result<(), SessionStoreError>;
}

/// In-memory implementation for tests.
#[derive(Default)]
pub struct InMemorySessionStore {
    states: Mutex<HashMap<SessionId, DeliveryState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, session: &SessionId) -> Option<DeliveryState> {
        self.states
            .lock()
            .ok()
            .and_then(|states| states.get(session).cloned())
    }

    fn save(
        &self,
        session: &SessionId,
        state: &DeliveryState,
    ) -> Result<(), SessionStoreError> {
        if let Ok(mut states) = self.states.lock() {
            states.insert(session.clone(), state.clone());
        }
        Ok(())
    }
}
