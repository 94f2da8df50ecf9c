//! Route guard policies.
//!
//! Guards are pure decision functions of `(session, requirements)`; the
//! external router performs the actual navigation. Policy for authenticated
//! users failing a role or permission check is a redirect to
//! [`UNAUTHORIZED_ROUTE`], consistently across both guards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bankshell_auth::{Permission, Role, Session};

/// Route the login guard redirects anonymous users to.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Route authenticated-but-forbidden users are redirected to.
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Query parameter carrying the originally attempted URL through the login
/// redirect.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed.
    Allow,
    /// Block the navigation and stay on the current route.
    Deny,
    /// Send the user elsewhere, optionally remembering where they were
    /// headed.
    Redirect {
        path: String,
        return_url: Option<String>,
    },
}

impl GuardDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    fn to_login(attempted_url: &str) -> Self {
        GuardDecision::Redirect {
            path: LOGIN_ROUTE.to_string(),
            return_url: Some(attempted_url.to_string()),
        }
    }

    fn to_unauthorized() -> Self {
        GuardDecision::Redirect {
            path: UNAUTHORIZED_ROUTE.to_string(),
            return_url: None,
        }
    }

    /// Query pairs the router should append to the redirect target.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            GuardDecision::Redirect {
                return_url: Some(url),
                ..
            } => vec![(RETURN_URL_PARAM, url.as_str())],
            _ => Vec::new(),
        }
    }
}

/// Guard metadata declared on a route.
///
/// Every list defaults to empty, which passes vacuously — a route with no
/// requirements only cares about the guard's own authentication policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequirements {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permissions_any: Vec<Permission>,
    #[serde(default)]
    pub permissions_all: Vec<Permission>,
}

impl RouteRequirements {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn roles(roles: impl Into<Vec<Role>>) -> Self {
        Self {
            roles: roles.into(),
            ..Self::default()
        }
    }

    pub fn all_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            permissions_all: permissions.into(),
            ..Self::default()
        }
    }

    pub fn any_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            permissions_any: permissions.into(),
            ..Self::default()
        }
    }
}

/// Must-be-authenticated guard.
///
/// Anonymous sessions are sent to login with the attempted URL preserved;
/// authenticated sessions missing a declared role go to the unauthorized
/// page.
pub fn require_authenticated(
    session: &Session,
    requirements: &RouteRequirements,
    attempted_url: &str,
) -> GuardDecision {
    if !session.is_authenticated() {
        debug!(attempted_url, "unauthenticated; redirecting to login");
        return GuardDecision::to_login(attempted_url);
    }
    if !requirements.roles.is_empty() && !session.has_any_role(&requirements.roles) {
        debug!(attempted_url, "missing required role");
        return GuardDecision::to_unauthorized();
    }
    GuardDecision::Allow
}

/// Must-be-anonymous guard (login/register pages).
///
/// An authenticated user is simply blocked; there is nothing to redirect
/// to, staying on the current route is the correct outcome.
pub fn require_anonymous(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        debug!("already authenticated; blocking anonymous-only route");
        GuardDecision::Deny
    } else {
        GuardDecision::Allow
    }
}

/// Permission guard.
///
/// Anonymous sessions go to login with the attempted URL preserved. An
/// authenticated session must satisfy *all* of `permissions_all` and *any*
/// of `permissions_any`; both checks pass vacuously when unspecified.
pub fn require_permission(
    session: &Session,
    requirements: &RouteRequirements,
    attempted_url: &str,
) -> GuardDecision {
    if !session.is_authenticated() {
        debug!(attempted_url, "unauthenticated; redirecting to login");
        return GuardDecision::to_login(attempted_url);
    }

    let has_all = session.has_all(&requirements.permissions_all);
    let has_any = session.has_any(&requirements.permissions_any);
    if !has_all || !has_any {
        debug!(attempted_url, has_all, has_any, "insufficient permissions");
        return GuardDecision::to_unauthorized();
    }
    GuardDecision::Allow
}
