//! Session state and the injectable session store.
//!
//! The session is the only shared mutable state in the client. Discipline is
//! single-writer/many-readers: the auth façade writes it on login, register,
//! and logout; every other component only reads. [`MemorySessionStore`] is
//! the default implementation; applications that persist sessions (browser
//! local storage, keychain, a file) implement [`SessionStore`] themselves and
//! inject it via [`CaritasClient::with_store`](crate::CaritasClient::with_store).

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::types::UserSummary;

/// An authenticated session as issued by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to every request while the session lives.
    pub token: String,
    /// The authenticated user.
    pub user: UserSummary,
    /// Role names granted to the user (e.g. `donor`, `donee`, `admin`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Session {
    /// `true` if the session carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Session storage abstraction.
///
/// Readers must never observe a half-written session: `set` and `clear`
/// replace the whole value atomically. Absence of a session means logged out.
pub trait SessionStore: Send + Sync {
    /// Current session, if any.
    fn get(&self) -> Option<Session>;

    /// Replace the session atomically.
    fn set(&self, session: Session);

    /// Drop the session atomically.
    fn clear(&self);

    /// Receiver notified on every session change.
    ///
    /// The receiver borrows the latest value; a UI layer can await
    /// `changed()` to react to login/logout.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// In-memory session store.
///
/// Backed by a [`watch`] channel, which gives atomic whole-value replacement
/// and change notification in one primitive.
#[derive(Debug)]
pub struct MemorySessionStore {
    tx: watch::Sender<Option<Session>>,
}

impl MemorySessionStore {
    /// Create an empty (logged-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(None),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    fn set(&self, session: Session) {
        self.tx.send_replace(Some(session));
    }

    fn clear(&self) {
        self.tx.send_replace(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "t0k3n".to_owned(),
            user: UserSummary {
                id: "u1".to_owned(),
                name: "Ada".to_owned(),
                email: "ada@example.org".to_owned(),
            },
            roles: vec!["donor".to_owned()],
        }
    }

    #[test]
    fn starts_logged_out() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn set_then_clear_round_trips() {
        let store = MemorySessionStore::new();
        store.set(sample_session());
        let session = store.get();
        assert_eq!(session.map(|s| s.token), Some("t0k3n".to_owned()));
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn roles_are_queryable() {
        let session = sample_session();
        assert!(session.has_role("donor"));
        assert!(!session.has_role("admin"));
    }

    #[test]
    fn subscribers_observe_changes() {
        tokio_test::block_on(async {
            let store = MemorySessionStore::new();
            let mut rx = store.subscribe();
            store.set(sample_session());
            rx.changed().await.ok();
            assert!(rx.borrow().is_some());
            store.clear();
            rx.changed().await.ok();
            assert!(rx.borrow().is_none());
        });
    }
}
