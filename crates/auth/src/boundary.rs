//! Contract of the external authentication collaborator.

use crate::{Role, UserInfo};

/// The auth machinery the shell consumes but does not own.
///
/// Login, logout, token storage and expiry all live behind this trait.
/// The boundary is the sole source of login/logout events: the session
/// store only ever reacts to `current_user()` transitions, it never
/// fabricates a session on its own.
pub trait AuthBoundary: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn current_user(&self) -> Option<UserInfo>;

    fn has_any_role(&self, roles: &[Role]) -> bool {
        match self.current_user() {
            Some(user) => roles.contains(&user.role),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankshell_core::UserId;

    struct StubAuth(Option<UserInfo>);

    impl AuthBoundary for StubAuth {
        fn is_authenticated(&self) -> bool {
            self.0.is_some()
        }

        fn current_user(&self) -> Option<UserInfo> {
            self.0.clone()
        }
    }

    #[test]
    fn default_has_any_role_consults_current_user() {
        let anon = StubAuth(None);
        assert!(!anon.has_any_role(&[Role::Admin]));

        let authed = StubAuth(Some(UserInfo {
            id: UserId::new(),
            email: "m@example.com".to_string(),
            first_name: "Max".to_string(),
            last_name: "Mgr".to_string(),
            role: Role::Manager,
            avatar: None,
        }));
        assert!(authed.has_any_role(&[Role::Admin, Role::Manager]));
        assert!(!authed.has_any_role(&[Role::Viewer]));
    }
}
