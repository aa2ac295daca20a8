//! Session registry — manages live login session contexts

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{SessionContext, UserRole, View};

/// Thread-safe registry of live login sessions. Logged-out is the
/// absence of an entry; nothing here is persisted.
pub struct SessionRegistry {
    sessions: DashMap<String, SessionContext>,
}

/// Shared, reference-counted session registry
pub type SharedSessionRegistry = Arc<SessionRegistry>;

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Wrap in `Arc` for shared ownership
    pub fn shared() -> SharedSessionRegistry {
        Arc::new(Self::new())
    }

    /// Open a context for a fresh login, landing on the inventory view.
    /// Returns the session id carried in the issued token.
    pub fn open(&self, username: &str, role: UserRole) -> String {
        let session_id = Uuid::new_v4().to_string();
        info!(username, session_id = %session_id, "Opening session");
        self.sessions
            .insert(session_id.clone(), SessionContext::login(username, role));
        session_id
    }

    /// Drop a context on logout, clearing all its state.
    pub fn close(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            info!(session_id, "Session closed");
        } else {
            warn!(session_id, "Attempted to close unknown session");
        }
    }

    pub fn context(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|c| c.value().clone())
    }

    /// Context for a valid token. Tokens outlive in-memory state, so a
    /// context lost to a process restart is recreated at the landing view.
    pub fn context_or_login(
        &self,
        session_id: &str,
        username: &str,
        role: UserRole,
    ) -> SessionContext {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionContext::login(username, role))
            .value()
            .clone()
    }

    /// Navigate the session to a view (any-to-any among the four views).
    pub fn select_view(
        &self,
        session_id: &str,
        username: &str,
        role: UserRole,
        view: View,
    ) -> SessionContext {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionContext::login(username, role));
        entry.select_view(view);
        entry.value().clone()
    }

    /// Number of live sessions
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_lands_on_inventory() {
        let registry = SessionRegistry::new();
        let sid = registry.open("amira", UserRole::User);

        let ctx = registry.context(&sid).unwrap();
        assert_eq!(ctx.active_view, View::Inventory);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn select_view_transitions_the_context() {
        let registry = SessionRegistry::new();
        let sid = registry.open("amira", UserRole::User);

        let ctx = registry.select_view(&sid, "amira", UserRole::User, View::Predict);
        assert_eq!(ctx.active_view, View::Predict);
        assert_eq!(registry.context(&sid).unwrap().active_view, View::Predict);
    }

    #[test]
    fn close_removes_the_context() {
        let registry = SessionRegistry::new();
        let sid = registry.open("amira", UserRole::User);

        registry.close(&sid);
        assert!(registry.context(&sid).is_none());
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn lost_context_is_recreated_at_the_landing_view() {
        // A token that outlived a restart: no entry under its sid.
        let registry = SessionRegistry::new();

        let ctx = registry.context_or_login("stale-sid", "amira", UserRole::Admin);
        assert_eq!(ctx.active_view, View::Inventory);
        assert_eq!(registry.count(), 1);
    }
}
