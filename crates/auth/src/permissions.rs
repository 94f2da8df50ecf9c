//! Permission identifiers and the static role→permission table.

use std::borrow::{Borrow, Cow};
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Permission identifier.
///
/// Permissions are modeled as opaque namespaced strings (`domain.action`,
/// e.g. `banking.read`). Feature modules declare required permissions on
/// their routes and navigation entries; this crate only knows strings,
/// never feature semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `domain` half of `domain.action`, or the whole string when the
    /// permission is not namespaced.
    pub fn domain(&self) -> &str {
        self.as_str().split('.').next().unwrap_or(self.as_str())
    }
}

impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

const BANKING_READ: Permission = Permission(Cow::Borrowed("banking.read"));
const BANKING_WRITE: Permission = Permission(Cow::Borrowed("banking.write"));

static ADMIN_PERMISSIONS: &[Permission] = &[BANKING_READ, BANKING_WRITE];
static MANAGER_PERMISSIONS: &[Permission] = &[BANKING_READ, BANKING_WRITE];
static ANALYST_PERMISSIONS: &[Permission] = &[BANKING_READ];
static VIEWER_PERMISSIONS: &[Permission] = &[BANKING_READ];

impl Role {
    /// Permissions granted by this role.
    ///
    /// Total over the enumeration; every role maps to a defined (possibly
    /// empty) set. This table is the sole source of permissions — UI code
    /// never assembles permission sets on its own.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => ADMIN_PERMISSIONS,
            Role::Manager => MANAGER_PERMISSIONS,
            Role::Analyst => ANALYST_PERMISSIONS,
            Role::Viewer => VIEWER_PERMISSIONS,
        }
    }

    pub fn permission_set(&self) -> HashSet<Permission> {
        self.permissions().iter().cloned().collect()
    }
}

/// Permission lookup by role name for callers holding untyped strings.
///
/// Unrecognized names (including empty) yield the empty set — fail closed,
/// never fail open, never an error.
pub fn permissions_for_role_name(name: &str) -> HashSet<Permission> {
    Role::parse(name)
        .map(|role| role.permission_set())
        .unwrap_or_default()
}
