//! The authentication/authorization snapshot for the active user.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Permission, Role, UserInfo};

/// Session snapshot.
///
/// Fields are private so the two invariants hold by construction:
/// `user` is present iff the session is authenticated, and `permissions`
/// is always derived from `user.role` via the role table — no caller can
/// set either independently. There is deliberately no `Deserialize`:
/// sessions only ever originate from the auth boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    is_authenticated: bool,
    user: Option<UserInfo>,
    permissions: HashSet<Permission>,
    last_activity: Option<DateTime<Utc>>,
}

impl Session {
    /// The all-empty default session present from process start until the
    /// first login event.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            permissions: HashSet::new(),
            last_activity: None,
        }
    }

    /// Session for a freshly authenticated user.
    pub fn authenticated(user: UserInfo, now: DateTime<Utc>) -> Self {
        let permissions = user.role.permission_set();
        Self {
            is_authenticated: true,
            user: Some(user),
            permissions,
            last_activity: Some(now),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn permissions(&self) -> &HashSet<Permission> {
        &self.permissions
    }

    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    /// Record user activity. Ignored on an anonymous session — activity
    /// must never resurrect a session.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.is_authenticated {
            self.last_activity = Some(now);
        }
    }

    // ─── Permission queries ──────────────────────────────────────────────

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// True iff at least one of `required` is granted. An empty requirement
    /// list is vacuously true — it mirrors "no specific requirement".
    pub fn has_any(&self, required: &[Permission]) -> bool {
        required.is_empty() || required.iter().any(|p| self.permissions.contains(p))
    }

    /// True iff every one of `required` is granted. Empty list is vacuously
    /// true.
    pub fn has_all(&self, required: &[Permission]) -> bool {
        required.iter().all(|p| self.permissions.contains(p))
    }

    // ─── Role queries ────────────────────────────────────────────────────

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        match self.role() {
            Some(role) => roles.contains(&role),
            None => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
