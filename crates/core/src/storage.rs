//! Persisted session layout
//!
//! A session is mirrored into three storage keys (`user`, `token`,
//! `sessionID`). They are only ever written and removed together; a partial
//! set found at startup is treated as corrupt and wiped.

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::types::{Session, User};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// String key/value store backing the persisted session (browser local
/// storage in the app, memory in tests).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Write all three session keys. If any write fails, none are left behind.
pub fn persist_session(store: &dyn KeyValueStore, session: &Session) -> Result<()> {
    let user = serde_json::to_string(&session.user)?;

    let written = store
        .set(AuthConfig::USER_KEY, &user)
        .and_then(|()| store.set(AuthConfig::TOKEN_KEY, &session.token))
        .and_then(|()| store.set(AuthConfig::SESSION_ID_KEY, &session.session_id));

    if written.is_err() {
        clear_persisted_session(store);
    }
    written
}

/// Remove all three session keys
pub fn clear_persisted_session(store: &dyn KeyValueStore) {
    store.remove(AuthConfig::USER_KEY);
    store.remove(AuthConfig::TOKEN_KEY);
    store.remove(AuthConfig::SESSION_ID_KEY);
}

/// Read a persisted session.
///
/// Returns `None` when nothing is stored. A partial or unparseable set of
/// keys is cleared and also yields `None`.
pub fn load_persisted_session(store: &dyn KeyValueStore) -> Option<Session> {
    let user = store.get(AuthConfig::USER_KEY);
    let token = store.get(AuthConfig::TOKEN_KEY);
    let session_id = store.get(AuthConfig::SESSION_ID_KEY);

    match (user, token, session_id) {
        (None, None, None) => None,
        (Some(user), Some(token), Some(session_id)) => match parse_user(&user) {
            Ok(user) if !token.is_empty() && !session_id.is_empty() => Some(Session {
                user,
                token,
                session_id,
            }),
            Ok(_) => {
                warn!("Persisted session has empty token or session id, clearing it");
                clear_persisted_session(store);
                None
            }
            Err(error) => {
                warn!(%error, "Persisted user is unreadable, clearing session");
                clear_persisted_session(store);
                None
            }
        },
        _ => {
            warn!("Persisted session is incomplete, clearing it");
            clear_persisted_session(store);
            None
        }
    }
}

fn parse_user(raw: &str) -> Result<User> {
    serde_json::from_str(raw).map_err(Error::from)
}
