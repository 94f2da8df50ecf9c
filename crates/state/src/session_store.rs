//! Session store — single source of truth for the authentication snapshot.

use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use bankshell_auth::{Session, UserInfo};

use crate::listeners::{Listeners, SubscriptionHandle};

/// Holds the current [`Session`] and publishes every transition.
///
/// The store itself cannot fail: the auth boundary is the sole source of
/// login/logout events and this store only reacts to them. Transitions
/// replace the session wholesale under one lock, so observers never see a
/// half-updated session.
pub struct SessionStore {
    session: Mutex<Session>,
    listeners: Listeners<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(Session::anonymous()),
            listeners: Listeners::new(),
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// React to a login (`Some(user)`) or logout/expiry (`None`) event from
    /// the auth boundary. Reentrant-safe: the lock is released before
    /// subscribers run.
    pub fn on_auth_event(&self, user: Option<UserInfo>) {
        let next = match user {
            Some(user) => {
                debug!(email = %user.email, role = %user.role, "session established");
                Session::authenticated(user, Utc::now())
            }
            None => {
                debug!("session cleared");
                Session::anonymous()
            }
        };

        {
            let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
            *session = next.clone();
        }
        self.listeners.notify(&next);
    }

    /// Record authenticated user interaction. A no-op on an anonymous
    /// session — activity must never resurrect a session.
    pub fn update_last_activity(&self) {
        let updated = {
            let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
            if !session.is_authenticated() {
                return;
            }
            session.touch(Utc::now());
            session.clone()
        };
        self.listeners.notify(&updated);
    }

    /// Observe every session transition.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Session) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        self.listeners.subscribe(callback)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
