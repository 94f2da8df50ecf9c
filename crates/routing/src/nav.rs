//! Navigation tree filtering.
//!
//! The application declares its sidebar as a static tree of entries, each
//! optionally tagged with access metadata. [`filter_nav`] prunes the tree
//! to what the current session may see; the sidebar re-runs it whenever
//! the session changes.

use serde::{Deserialize, Serialize};

use bankshell_auth::{Permission, Role, Session};

/// Access metadata on a navigation entry.
///
/// Each list passes vacuously when empty; a populated list must pass its
/// check (roles → any-of, `any` → at least one permission, `all` → every
/// permission).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAccess {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub any: Vec<Permission>,
    #[serde(default)]
    pub all: Vec<Permission>,
}

impl NavAccess {
    pub fn roles(roles: impl Into<Vec<Role>>) -> Self {
        Self {
            roles: roles.into(),
            ..Self::default()
        }
    }

    pub fn any_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            any: permissions.into(),
            ..Self::default()
        }
    }

    pub fn all_of(permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            all: permissions.into(),
            ..Self::default()
        }
    }

    fn permits(&self, session: &Session) -> bool {
        if !self.roles.is_empty() && !session.has_any_role(&self.roles) {
            return false;
        }
        if !self.any.is_empty() && !session.has_any(&self.any) {
            return false;
        }
        if !self.all.is_empty() && !session.has_all(&self.all) {
            return false;
        }
        true
    }
}

/// One entry in the navigation tree: a leaf link or a group with children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<NavAccess>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn leaf(label: &str, route: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            route: Some(route.to_string()),
            access: None,
            children: Vec::new(),
        }
    }

    pub fn group(label: &str, children: Vec<NavItem>) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            route: None,
            access: None,
            children,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_access(mut self, access: NavAccess) -> Self {
        self.access = Some(access);
        self
    }

    fn accessible_to(&self, session: &Session) -> bool {
        self.access
            .as_ref()
            .map(|access| access.permits(session))
            .unwrap_or(true)
    }
}

/// Prune `items` to the entries `session` may see.
///
/// Recursive and order-preserving. A group whose children are all filtered
/// away is dropped with them — an empty expandable section is never
/// rendered. Entries without access metadata always survive their own
/// check.
pub fn filter_nav(items: &[NavItem], session: &Session) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.accessible_to(session))
        .filter_map(|item| {
            let children = filter_nav(&item.children, session);
            if !item.children.is_empty() && children.is_empty() {
                // A group that lost all its children goes with them.
                return None;
            }
            Some(NavItem {
                children,
                ..item.clone()
            })
        })
        .collect()
}

/// The default sidebar tree of the banking shell.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Dashboard", "/dashboard").with_icon("fa-solid fa-gauge"),
        NavItem::group(
            "Banking",
            vec![
                NavItem::leaf("Accounts", "/banking/accounts").with_icon("fa-solid fa-wallet"),
                NavItem::leaf("Balances", "/banking/balances")
                    .with_icon("fa-solid fa-scale-balanced"),
                NavItem::leaf("Transactions", "/banking/transactions")
                    .with_icon("fa-solid fa-right-left"),
            ],
        )
        .with_icon("fa-solid fa-building-columns")
        .with_access(NavAccess::any_of([Permission::new("banking.read")])),
        NavItem::group(
            "Users",
            vec![NavItem::leaf("List", "/users/list").with_icon("fa-regular fa-rectangle-list")],
        )
        .with_icon("fa-solid fa-users")
        .with_access(NavAccess::roles([Role::Admin, Role::Manager])),
        NavItem::group(
            "Securities",
            vec![
                NavItem::leaf("List", "/securities/list").with_icon("fa-regular fa-rectangle-list"),
            ],
        )
        .with_icon("fa-solid fa-shield-halved"),
    ]
}
